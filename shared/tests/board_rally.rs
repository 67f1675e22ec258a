//! Board layout and bookkeeping exercised together, the way the game drives
//! them over a few physics steps.

use audiopong_shared::body::{BodyTag, Shape};
use audiopong_shared::collisions::{CollisionLedger, TagPair};
use audiopong_shared::config::{BoardConfig, GameConfig};
use audiopong_shared::environment::Environment;
use audiopong_shared::layout::{is_counter_clockwise, BoardLayout};
use audiopong_shared::scoring::{scorer_for, serve_velocity, Score, Side};
use audiopong_shared::vec2::Vec2;

fn inside(point: Vec2, half_w: f32, half_h: f32) -> bool {
    point.x.abs() <= half_w && point.y.abs() <= half_h
}

#[test]
fn every_body_lies_within_the_border() {
    let config = BoardConfig {
        board_width: 8.0,
        board_height: 20.0,
        ..BoardConfig::default()
    };
    assert!(config.validate().is_ok());
    let layout = BoardLayout::new(&config);

    for body in layout.static_bodies() {
        let half_w = config.board_width * 0.5 + 1e-4;
        let half_h = config.board_height * 0.5 + 1e-4;
        match &body.shape {
            Shape::Polygon { vertices } => {
                assert!(is_counter_clockwise(vertices), "{:?}", body.tag);
                for v in vertices {
                    let world = Vec2::new(body.position.x + v.x, body.position.y + v.y);
                    assert!(inside(world, half_w, half_h), "{:?} at {world:?}", body.tag);
                }
            }
            Shape::Box {
                half_width,
                half_height,
            } => {
                assert!(inside(
                    Vec2::new(body.position.x + half_width, body.position.y + half_height),
                    half_w,
                    half_h
                ));
                assert!(inside(
                    Vec2::new(body.position.x - half_width, body.position.y - half_height),
                    half_w,
                    half_h
                ));
            }
            Shape::ChainLoop { vertices } => {
                assert_eq!(body.tag, BodyTag::Border);
                assert_eq!(vertices.len(), 4);
            }
            Shape::Circle { .. } => panic!("no circles among permanent bodies"),
        }
    }
}

#[test]
fn a_rally_ending_in_a_point() {
    let config = GameConfig::default();
    let layout = BoardLayout::new(&config.board);
    let mut ledger = CollisionLedger::default();
    let mut score = Score::default();

    let serve = serve_velocity(
        config.play.serve_speed,
        config.play.serve_drift,
        1.0,
        Side::Lower,
    );
    let ball = layout.ball(config.play.ball_spawn, serve);
    assert!(ball.linear_velocity.y < 0.0);

    // Step 1: ball meets the lower paddle.
    ledger.begin_step();
    ledger.begin_contact(BodyTag::Ball, BodyTag::LowerPaddle, layout.lower_paddle_position);
    assert!(ledger.touched_this_step(BodyTag::LowerPaddle, BodyTag::Ball).is_some());

    // Step 2: it leaves the paddle.
    ledger.begin_step();
    ledger.end_contact(BodyTag::Ball, BodyTag::LowerPaddle);
    assert_eq!(ledger.step_len(), 0);
    assert_eq!(ledger.active_len(), 0);

    // Step 3: the opponent misses and the ball enters the upper dead zone.
    ledger.begin_step();
    ledger.begin_contact(
        BodyTag::UpperDeadZone,
        BodyTag::Ball,
        layout.upper_dead_zone_position,
    );
    let scored: Vec<Side> = ledger
        .this_step()
        .filter_map(|(pair, _)| scorer_for(pair))
        .collect();
    assert_eq!(scored, vec![Side::Lower]);
    for side in scored {
        score.award(side);
    }
    ledger.forget(BodyTag::Ball);

    assert_eq!(score, Score { lower: 1, upper: 0 });
    assert_eq!(ledger.active_len(), 0);
    assert!(ledger
        .this_step()
        .any(|(pair, _)| pair == TagPair::new(BodyTag::Ball, BodyTag::UpperDeadZone)));
}

#[test]
fn ball_is_louder_near_the_player() {
    let config = GameConfig::default();
    let layout = BoardLayout::new(&config.board);
    let env = Environment::from_config(&config);

    let near = env.gain_at(layout.lower_paddle_position);
    let far = env.gain_at(layout.upper_paddle_position);
    assert!(near > far);
    assert!(far >= 0.0);
}
