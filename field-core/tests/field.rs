use field_core::config::{FieldConfig, LinkMode};
use field_core::frame_loop::FrameLoop;
use field_core::particle::Particle;
use field_core::simulator::ParticleSimulator;
use field_core::surface::{CommandBuffer, DrawCommand};
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

/// Two motionless particles 70.7px apart on an 800x600 surface.
fn two_particle_scene(mode: LinkMode) -> (ParticleSimulator, CommandBuffer) {
    let buf = CommandBuffer::new(800.0, 600.0);
    let cfg = FieldConfig {
        link_mode: mode,
        ..FieldConfig::default()
    };
    let particles = vec![
        Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0, 0.5),
        Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 1.0, 0.5),
    ];
    let mut sim = ParticleSimulator::from_particles(&buf, cfg, particles).unwrap();
    sim.set_pointer(700.0, 500.0);
    (sim, buf)
}

fn line_alphas(buf: &CommandBuffer) -> Vec<f32> {
    buf.lines()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, color, .. } if from != to => Some(color.alpha),
            _ => None,
        })
        .collect()
}

// ==================================================================================
// End-to-end
// ==================================================================================

#[test]
fn two_particles_stay_put_and_get_linked() {
    let (mut sim, mut buf) = two_particle_scene(LinkMode::UniquePairs);

    sim.frame(&mut buf).unwrap();

    let positions: Vec<Vec2> = sim.particles().iter().map(|p| p.pos()).collect();
    assert_eq!(positions, vec![Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0)]);

    let alphas = line_alphas(&buf);
    assert_eq!(alphas.len(), 1);
    let expected = 0.1 * (100.0 - 50.0f32 * 2.0f32.sqrt()) / 100.0;
    assert!((alphas[0] - expected).abs() < 1e-5);
    assert!((alphas[0] - 0.0293).abs() < 1e-3);
}

#[test]
fn two_particles_in_parity_mode_link_twice() {
    let (mut sim, mut buf) = two_particle_scene(LinkMode::AllPairs);

    sim.frame(&mut buf).unwrap();

    let alphas = line_alphas(&buf);
    assert_eq!(alphas.len(), 2);
    assert_eq!(alphas[0], alphas[1]);
    // Plus one zero-length self link per particle.
    assert_eq!(buf.lines().count(), 4);
}

// ==================================================================================
// Long runs
// ==================================================================================

#[test]
fn random_field_stays_within_bounds_for_many_frames() {
    let mut buf = CommandBuffer::new(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = ParticleSimulator::new(&buf, FieldConfig::default(), &mut rng).unwrap();
    let mut frames = FrameLoop::new();

    for i in 0..600 {
        // sweep the pointer across the surface
        sim.set_pointer((i as f32 * 3.0) % 1024.0, 384.0);
        assert!(frames.tick(&mut sim, &mut buf));

        let b = sim.bounds();
        for p in sim.particles().iter() {
            assert!(p.pos().x >= 0.0 && p.pos().x <= b.x);
            assert!(p.pos().y >= 0.0 && p.pos().y <= b.y);
        }
    }

    assert_eq!(frames.frames(), 600);
    assert_eq!(sim.particles().len(), 50);
}

#[test]
fn size_and_opacity_never_change() {
    let mut buf = CommandBuffer::new(400.0, 400.0);
    let mut rng = StdRng::seed_from_u64(9);
    let mut sim = ParticleSimulator::new(&buf, FieldConfig::default(), &mut rng).unwrap();
    let before: Vec<(f32, f32)> = sim.particles().iter().map(|p| (p.size(), p.opacity())).collect();

    sim.set_pointer(200.0, 200.0);
    for _ in 0..100 {
        sim.frame(&mut buf).unwrap();
    }

    let after: Vec<(f32, f32)> = sim.particles().iter().map(|p| (p.size(), p.opacity())).collect();
    assert_eq!(before, after);
}
