//! The trail component: spawn on pointer movement, fade and draw per frame

use crate::config::TrailConfig;
use crate::glyph::draw_particle;
use crate::particle::ParticleField;
use crate::rand::{RandomSource, TrailRng};
use crate::spawn::try_spawn;
use glint_core::{Canvas, IdAllocator, Result, Vec2, Viewport};
use glint_runtime::{EventKind, FrameHandle, Host, HostEvent, ListenerId, OverlayComponent};

/// Owns the live particles, the drawing surface and the host registrations.
///
/// Until mounted on a host that can provide a canvas, every callback is a
/// no-op. After `unmount`, late frame and event callbacks are dropped.
pub struct TrailAnimator<C: Canvas, R: RandomSource = TrailRng> {
    config: TrailConfig,
    rng: R,
    field: ParticleField,
    ids: IdAllocator,
    last_pointer: Option<Vec2>,
    canvas: Option<C>,
    pending_frame: Option<FrameHandle>,
    listeners: Vec<ListenerId>,
    mounted: bool,
    frames_drawn: u64,
}

impl<C: Canvas, R: RandomSource> TrailAnimator<C, R> {
    pub fn new(config: TrailConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            field: ParticleField::new(),
            ids: IdAllocator::new(),
            last_pointer: None,
            canvas: None,
            pending_frame: None,
            listeners: Vec::new(),
            mounted: false,
            frames_drawn: 0,
        }
    }

    /// Record the pointer and maybe spawn one particle near it
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.mounted {
            return;
        }
        self.last_pointer = Some(Vec2::new(x as f32, y as f32));

        if let Some(particle) = try_spawn(&self.config, &mut self.rng, &mut self.ids, x, y) {
            log::trace!(
                "spawned particle {} size {:.2} decay {:.4}",
                particle.id(),
                particle.size(),
                particle.decay()
            );
            self.field.push(particle);
        }
    }

    /// Keep the canvas the same size as the viewport. Particle positions
    /// are left as they are.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.mounted {
            return;
        }
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(viewport);
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleField {
        &self.field
    }

    /// The drawing surface, while mounted
    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Last pointer position seen while mounted
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Frame cycles run since construction
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl<H, C, R> OverlayComponent<H> for TrailAnimator<C, R>
where
    H: Host<Canvas = C>,
    C: Canvas,
    R: RandomSource,
{
    fn mount(&mut self, host: &mut H) -> Result<()> {
        if self.mounted {
            log::debug!("cursor trail already mounted");
            return Ok(());
        }

        let viewport = host.viewport();
        let canvas = match host.create_canvas(viewport) {
            Ok(canvas) => canvas,
            Err(err) => {
                // No surface: stay inert rather than fail the host
                log::warn!("cursor trail disabled: {err}");
                return Ok(());
            }
        };

        self.canvas = Some(canvas);
        self.listeners.push(host.add_listener(EventKind::Resize));
        self.listeners.push(host.add_listener(EventKind::PointerMove));
        self.mounted = true;
        self.pending_frame = Some(host.request_frame());
        log::debug!(
            "cursor trail mounted on {}x{} surface",
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &HostEvent, _host: &mut H) {
        match *event {
            HostEvent::PointerMoved { x, y } => self.on_pointer_move(x, y),
            HostEvent::Resized(viewport) => self.on_resize(viewport),
        }
    }

    fn frame(&mut self, handle: FrameHandle, host: &mut H) {
        if !self.mounted || self.pending_frame != Some(handle) {
            log::trace!("dropping stale frame {}", handle.raw());
            return;
        }
        self.pending_frame = None;

        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        canvas.clear();

        let config = &self.config;
        let removed = self.field.advance(|p| draw_particle(canvas, p, config));
        if removed > 0 {
            log::trace!("{removed} particle(s) faded out");
        }
        self.frames_drawn += 1;

        self.pending_frame = Some(host.request_frame());
    }

    fn unmount(&mut self, host: &mut H) {
        for id in self.listeners.drain(..) {
            host.remove_listener(id);
        }
        if let Some(handle) = self.pending_frame.take() {
            host.cancel_frame(handle);
        }
        self.canvas = None;
        self.field.clear();
        if self.mounted {
            log::debug!("cursor trail unmounted");
        }
        self.mounted = false;
    }

    fn name(&self) -> &str {
        "cursor-trail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::ScriptedRandom;
    use glint_core::{Canvas, DrawOp, RecordingCanvas};
    use glint_runtime::{dispatch_event, run_frame, HeadlessHost};

    type Animator<R> = TrailAnimator<RecordingCanvas, R>;

    fn viewport() -> Viewport {
        Viewport::new(1280, 720)
    }

    fn mounted<R: RandomSource>(rng: R) -> (Animator<R>, HeadlessHost) {
        let mut host = HeadlessHost::new(viewport());
        let mut animator = TrailAnimator::new(TrailConfig::default(), rng);
        animator.mount(&mut host).unwrap();
        (animator, host)
    }

    fn pointer(x: f64, y: f64) -> HostEvent {
        HostEvent::PointerMoved { x, y }
    }

    #[test]
    fn mount_registers_listeners_and_first_frame() {
        let (animator, host) = mounted(TrailRng::new(1));
        assert!(animator.is_mounted());
        assert!(host.listeners().is_listening(EventKind::PointerMove));
        assert!(host.listeners().is_listening(EventKind::Resize));
        assert_eq!(host.listeners().len(), 2);
        assert!(host.pending_frame().is_some());
        assert_eq!(animator.canvas().unwrap().size(), viewport());
    }

    #[test]
    fn second_mount_does_not_register_twice() {
        let (mut animator, mut host) = mounted(TrailRng::new(1));
        animator.mount(&mut host).unwrap();
        assert_eq!(host.listeners().len(), 2);
    }

    #[test]
    fn one_event_above_threshold_spawns_one_particle() {
        let (mut animator, mut host) = mounted(ScriptedRandom::constant(0.95));
        assert!(dispatch_event(&mut animator, &mut host, pointer(300.0, 400.0)));

        assert_eq!(animator.particles().len(), 1);
        let p = &animator.particles().as_slice()[0];
        assert!((p.position().x - 300.0).abs() <= 10.0);
        assert!((p.position().y - 400.0).abs() <= 10.0);
        assert_eq!(p.opacity(), 1.0);
        assert_eq!(animator.last_pointer(), Some(Vec2::new(300.0, 400.0)));
    }

    #[test]
    fn events_below_threshold_only_track_pointer() {
        let (mut animator, mut host) = mounted(ScriptedRandom::constant(0.2));
        for i in 0..20 {
            dispatch_event(&mut animator, &mut host, pointer(i as f64, 5.0));
        }
        assert!(animator.particles().is_empty());
        assert_eq!(animator.last_pointer(), Some(Vec2::new(19.0, 5.0)));
    }

    #[test]
    fn ids_increase_per_spawn() {
        let (mut animator, mut host) = mounted(ScriptedRandom::constant(0.95));
        for _ in 0..3 {
            dispatch_event(&mut animator, &mut host, pointer(1.0, 1.0));
        }
        let ids: Vec<u64> = animator.particles().iter().map(|p| p.id().raw()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn frame_clears_draws_and_reschedules() {
        // gate, jitter x, jitter y, size -> 5.0, decay -> 0.02
        let rng = ScriptedRandom::new(&[0.9, 0.5, 0.5, 0.5, 0.5]);
        let (mut animator, mut host) = mounted(rng);
        dispatch_event(&mut animator, &mut host, pointer(50.0, 60.0));

        let first = host.pending_frame();
        assert!(run_frame(&mut animator, &mut host));
        let canvas = animator.canvas().unwrap();
        assert_eq!(canvas.clear_count(), 1);
        assert_eq!(canvas.gradient_count(), 1);
        assert_eq!(canvas.stroke_count(), 1);
        assert!(host.pending_frame().is_some());
        assert_ne!(host.pending_frame(), first);
        assert_eq!(animator.frames_drawn(), 1);

        let p = &animator.particles().as_slice()[0];
        assert!((p.opacity() - 0.98).abs() < 1e-9);
    }

    #[test]
    fn particle_removed_on_fiftieth_frame() {
        let rng = ScriptedRandom::new(&[0.9, 0.5, 0.5, 0.5, 0.5]);
        let (mut animator, mut host) = mounted(rng);
        dispatch_event(&mut animator, &mut host, pointer(50.0, 60.0));

        for _ in 0..49 {
            run_frame(&mut animator, &mut host);
        }
        assert_eq!(animator.particles().len(), 1);
        assert_eq!(animator.canvas().unwrap().gradient_count(), 1);

        run_frame(&mut animator, &mut host);
        assert!(animator.particles().is_empty());
        assert!(animator.canvas().unwrap().ops().is_empty());
    }

    #[test]
    fn small_particle_has_no_star() {
        // size = 2 + 0.1666 * 6 ≈ 3
        let rng = ScriptedRandom::new(&[0.9, 0.5, 0.5, 1.0 / 6.0, 0.5]);
        let (mut animator, mut host) = mounted(rng);
        dispatch_event(&mut animator, &mut host, pointer(10.0, 10.0));
        run_frame(&mut animator, &mut host);

        let canvas = animator.canvas().unwrap();
        assert_eq!(canvas.gradient_count(), 1);
        assert_eq!(canvas.stroke_count(), 0);
    }

    #[test]
    fn draw_order_is_spawn_order() {
        let (mut animator, mut host) = mounted(ScriptedRandom::new(&[0.9, 0.5, 0.5, 0.0, 0.5]));
        dispatch_event(&mut animator, &mut host, pointer(10.0, 10.0));
        dispatch_event(&mut animator, &mut host, pointer(20.0, 20.0));
        run_frame(&mut animator, &mut host);

        let centers: Vec<Vec2> = animator
            .canvas()
            .unwrap()
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::RadialGradient { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(centers, vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)]);
    }

    #[test]
    fn resize_follows_viewport_without_moving_particles() {
        let (mut animator, mut host) = mounted(ScriptedRandom::new(&[0.9, 0.5, 0.5, 0.5, 0.5]));
        dispatch_event(&mut animator, &mut host, pointer(100.0, 100.0));

        let bigger = Viewport::new(1920, 1080);
        host.set_viewport(bigger);
        assert!(dispatch_event(&mut animator, &mut host, HostEvent::Resized(bigger)));

        assert_eq!(animator.canvas().unwrap().size(), bigger);
        assert_eq!(
            animator.particles().as_slice()[0].position(),
            Vec2::new(100.0, 100.0)
        );
    }

    #[test]
    fn unmount_removes_everything() {
        let (mut animator, mut host) = mounted(ScriptedRandom::constant(0.95));
        dispatch_event(&mut animator, &mut host, pointer(1.0, 1.0));
        animator.unmount(&mut host);

        assert!(!animator.is_mounted());
        assert!(host.listeners().is_empty());
        assert!(host.pending_frame().is_none());
        assert_eq!(host.cancelled_frames(), 1);
        assert!(animator.canvas().is_none());
        assert!(animator.particles().is_empty());
    }

    #[test]
    fn callbacks_queued_before_unmount_are_dropped() {
        let (mut animator, mut host) = mounted(ScriptedRandom::constant(0.95));
        let queued = host.pending_frame().unwrap();
        animator.unmount(&mut host);

        // A frame and an event that were already in flight still arrive
        animator.frame(queued, &mut host);
        animator.handle_event(&pointer(5.0, 5.0), &mut host);
        animator.on_pointer_move(6.0, 6.0);

        assert!(animator.particles().is_empty());
        assert_eq!(animator.frames_drawn(), 0);
        assert!(host.pending_frame().is_none());
        assert!(animator.last_pointer().is_none());
    }

    #[test]
    fn superseded_frame_handle_is_ignored() {
        let (mut animator, mut host) = mounted(TrailRng::new(3));
        let first = host.take_due_frame().unwrap();
        animator.frame(first, &mut host);
        assert_eq!(animator.frames_drawn(), 1);

        // Replaying the old handle must not draw again
        animator.frame(first, &mut host);
        assert_eq!(animator.frames_drawn(), 1);
    }

    #[test]
    fn unavailable_surface_degrades_to_no_op() {
        let mut host = HeadlessHost::without_surface(viewport());
        let mut animator: Animator<_> =
            TrailAnimator::new(TrailConfig::default(), ScriptedRandom::constant(0.95));

        assert!(animator.mount(&mut host).is_ok());
        assert!(!animator.is_mounted());
        assert!(host.listeners().is_empty());
        assert!(host.pending_frame().is_none());

        animator.on_pointer_move(10.0, 10.0);
        assert!(!run_frame(&mut animator, &mut host));
        assert!(animator.particles().is_empty());

        // Teardown after a failed mount is safe
        animator.unmount(&mut host);
        assert!(host.listeners().is_empty());
    }

    #[test]
    fn can_remount_after_unmount() {
        let (mut animator, mut host) = mounted(TrailRng::new(5));
        animator.unmount(&mut host);
        animator.mount(&mut host).unwrap();
        assert!(animator.is_mounted());
        assert_eq!(host.listeners().len(), 2);
        assert!(run_frame(&mut animator, &mut host));
    }

    #[test]
    fn seeded_sessions_are_identical() {
        let session = || {
            let (mut animator, mut host) = mounted(TrailRng::new(77));
            for i in 0..150 {
                let t = i as f64;
                dispatch_event(&mut animator, &mut host, pointer(t * 3.0, 200.0 + t));
                if i % 5 == 0 {
                    run_frame(&mut animator, &mut host);
                }
            }
            animator.particles().as_slice().to_vec()
        };
        let a = session();
        let b = session();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn no_particle_is_drawn_at_zero_opacity() {
        let (mut animator, mut host) = mounted(TrailRng::new(11));
        for i in 0..300 {
            dispatch_event(&mut animator, &mut host, pointer(i as f64, i as f64));
            run_frame(&mut animator, &mut host);
            for op in animator.canvas().unwrap().ops() {
                if let DrawOp::RadialGradient { stops, .. } = op {
                    assert!(stops[0].color.a > 0.0);
                }
            }
            assert!(animator.particles().iter().all(|p| p.opacity() > 0.0));
        }
    }
}
