use crate::systems::rigid_body::integrate;

use super::{PerfTimer, PhysicsWorld};

pub(super) fn simulate(world: &mut PhysicsWorld, delta_time: f32) -> u32 {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.object_count = world.objects.len() as u32;
        world.perf_stats.trigger_count = world.triggers.len() as u32;
    }
    let simulate_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let delta_time = clamp_delta(world, delta_time);
    world.accumulator += delta_time;

    let fixed = world.config.fixed_timestep;
    let mut ticks = 0u32;
    while world.accumulator >= fixed {
        fixed_tick(world, fixed);
        world.accumulator -= fixed;
        ticks += 1;
    }

    if perf_on {
        let t0 = PerfTimer::start();
        world.interpolate();
        world.perf_stats.interpolate_ms = t0.elapsed_ms();
    } else {
        world.interpolate();
    }

    if let Some(t0) = simulate_start {
        world.perf_stats.ticks = ticks;
        world.perf_stats.simulate_ms = t0.elapsed_ms();
    }

    ticks
}

/// Frame deltas above `max_delta_time` are truncated; zero, negative and NaN
/// deltas advance nothing.
fn clamp_delta(world: &mut PhysicsWorld, delta_time: f32) -> f32 {
    let max = world.config.max_delta_time;
    if delta_time > max {
        log::debug!("frame delta {delta_time:.4}s clamped to {max}s");
        if world.perf_enabled {
            world.perf_stats.clamped_delta = true;
        }
        max
    } else if delta_time > 0.0 {
        delta_time
    } else {
        0.0
    }
}

/// One fixed tick: integrate, resolve object pairs, run triggers, then
/// promote this tick's intersections to "previous".
fn fixed_tick(world: &mut PhysicsWorld, dt: f32) {
    let perf_on = world.perf_enabled;

    if perf_on {
        let t0 = PerfTimer::start();
        integrate(&mut world.bodies, dt);
        world.perf_stats.integrate_ms += t0.elapsed_ms();
    } else {
        integrate(&mut world.bodies, dt);
    }

    if perf_on {
        let t0 = PerfTimer::start();
        world.collide_objects();
        world.perf_stats.collide_ms += t0.elapsed_ms();
    } else {
        world.collide_objects();
    }

    if perf_on {
        let t0 = PerfTimer::start();
        world.process_triggers();
        world.perf_stats.trigger_ms += t0.elapsed_ms();
    } else {
        world.process_triggers();
    }

    world.history.swap();
    world.tick += 1;
}
