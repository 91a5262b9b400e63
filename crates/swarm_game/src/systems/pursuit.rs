// crates/swarm_game/src/systems/pursuit.rs

use glam::IVec2;

use super::clamp_to_world;
use super::spawner::EnemyPool;

/// Integer displacement that moves `pos` `speed` pixels toward `target`.
///
/// The direction is normalised in f32 and truncated toward zero. A component
/// that truncates to zero while the target is still off that axis is forced
/// to a single pixel, so enemies never stall short of a nearly axis-aligned
/// target.
pub fn pursuit_step(pos: IVec2, target: IVec2, speed: i32) -> IVec2 {
    let v = target - pos;
    if v == IVec2::ZERO {
        return IVec2::ZERO;
    }

    // Squared length in i64; i32 overflows once the world passes ~46k.
    let len_sq = i64::from(v.x).pow(2) + i64::from(v.y).pow(2);
    let len = (len_sq as f32).sqrt();
    let dir = v.as_vec2() / len;
    let mut step = (dir * speed as f32).as_ivec2();

    // Anti-stall
    if step.x == 0 && v.x != 0 {
        step.x = v.x.signum();
    }
    if step.y == 0 && v.y != 0 {
        step.y = v.y.signum();
    }
    step
}

/// Moves every alive enemy one step toward `target`, clamped to the world.
pub fn steer_all(pool: &mut EnemyPool, target: IVec2, world: IVec2) {
    for (_, enemy) in pool.iter_alive_mut() {
        let step = pursuit_step(enemy.pos, target, enemy.speed);
        enemy.pos = clamp_to_world(enemy.pos + step, world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::spawner::Enemy;

    fn dist_sq(a: IVec2, b: IVec2) -> i32 {
        (a - b).length_squared()
    }

    #[test]
    fn axis_aligned_step() {
        let pos = IVec2::new(100, 100);
        let step = pursuit_step(pos, IVec2::new(200, 100), 3);
        assert_eq!(pos + step, IVec2::new(103, 100));
    }

    #[test]
    fn standing_on_the_target_does_not_move() {
        let pos = IVec2::new(640, 480);
        assert_eq!(pursuit_step(pos, pos, 4), IVec2::ZERO);
    }

    #[test]
    fn truncates_toward_zero() {
        // 3-4-5 triangle: (0.6, 0.8) * 4 = (2.4, 3.2)
        assert_eq!(pursuit_step(IVec2::new(10, 10), IVec2::new(13, 14), 4), IVec2::new(2, 3));
        // (-0.8, 0.6) * 3 = (-2.4, 1.8)
        assert_eq!(pursuit_step(IVec2::new(500, 500), IVec2::new(100, 800), 3), IVec2::new(-2, 1));
        assert_eq!(pursuit_step(IVec2::new(100, 100), IVec2::new(200, 200), 4), IVec2::new(2, 2));
    }

    #[test]
    fn near_axis_aligned_target_gets_a_one_pixel_nudge() {
        let step = pursuit_step(IVec2::ZERO, IVec2::new(1000, 1), 2);
        assert_eq!(step.y, 1);
        let step = pursuit_step(IVec2::ZERO, IVec2::new(-1, -1000), 2);
        assert_eq!(step.x, -1);
    }

    #[test]
    fn distance_shrinks_and_step_tracks_the_direction() {
        let target = IVec2::new(1510, 1510);
        for speed in 2..=4 {
            for x in (1000..2000).step_by(37) {
                for y in (1000..2000).step_by(41) {
                    let pos = IVec2::new(x, y);
                    // Points within one step of the target may overshoot it.
                    if dist_sq(pos, target) <= (speed + 1) * (speed + 1) {
                        continue;
                    }
                    let step = pursuit_step(pos, target, speed);
                    assert!(dist_sq(pos + step, target) < dist_sq(pos, target));

                    let v = (target - pos).as_vec2();
                    let exact = v / v.length() * speed as f32;
                    let error = (step.as_vec2() - exact).abs().max_element();
                    assert!(error < 1.0, "step {step} strays from {exact} at speed {speed}");
                    // Anti-stall adds at most one pixel; truncating both
                    // components can take off up to sqrt(2).
                    let len = step.as_vec2().length();
                    assert!(len <= speed as f32 + 1.0);
                    assert!(len >= speed as f32 - std::f32::consts::SQRT_2);
                }
            }
        }
    }

    #[test]
    fn steers_across_a_very_large_world() {
        let world = IVec2::new(60_000, 60_000);
        let mut pool = EnemyPool::with_capacity(2);
        pool.spawn(Enemy { pos: IVec2::ZERO, speed: 3 });
        pool.spawn(Enemy { pos: IVec2::new(59_999, 0), speed: 4 });

        steer_all(&mut pool, IVec2::new(59_000, 59_000), world);
        let positions: Vec<IVec2> = pool.iter_alive().map(|(_, e)| e.pos).collect();
        // (0.707, 0.707) * 3 truncates to (2, 2).
        assert_eq!(positions[0], IVec2::new(2, 2));
        // Almost straight down: (-0.017, 1.0) * 4 gives (0, 3), nudged to (-1, 3).
        assert_eq!(positions[1], IVec2::new(59_998, 3));
    }

    #[test]
    fn steering_clamps_to_the_world() {
        let world = IVec2::new(3000, 3000);
        let mut pool = EnemyPool::with_capacity(2);
        pool.spawn(Enemy { pos: IVec2::new(0, 0), speed: 4 });
        pool.spawn(Enemy { pos: IVec2::new(2999, 10), speed: 3 });

        steer_all(&mut pool, IVec2::new(-50, -50), world);
        let positions: Vec<IVec2> = pool.iter_alive().map(|(_, e)| e.pos).collect();
        assert_eq!(positions[0], IVec2::ZERO);
        assert!(positions[1].x < 2999);
        assert!(positions.iter().all(|p| p.cmpge(IVec2::ZERO).all() && p.cmplt(world).all()));
    }
}
