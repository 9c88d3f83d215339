use crate::driver::{runtime_available, start_animation, AnimationHandle};
use crate::theme::use_loader_settings;
use dioxus::prelude::*;
use loading_types::{Animation, EntranceAnimation, EntranceFrame, PulseAnimation};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Spinner entrance: runs once on mount, never restarts on prop changes.
pub fn use_entrance() -> ReadSignal<EntranceFrame, SyncStorage> {
    use_animation("entrance", EntranceAnimation::new()).into()
}

/// Skeleton pulse opacity, looping until the component unmounts.
pub fn use_pulse() -> ReadSignal<f32, SyncStorage> {
    use_animation("pulse", PulseAnimation::new()).into()
}

/// Whether this component's animations are pushed frame by frame. When they
/// are not, the stylesheet keyframes animate the widget instead.
pub fn use_frames_driven() -> bool {
    use_hook(runtime_available)
}

/// Value of the `data-driver` attribute the stylesheets key their
/// keyframe fallbacks on.
pub(crate) fn driver_attr(driven: bool) -> &'static str {
    if driven {
        "frames"
    } else {
        "keyframes"
    }
}

/// Drive `animation` for the lifetime of the calling component.
///
/// The frame loop is started the first time the hook runs and stopped
/// when the scope is dropped.
fn use_animation<A>(label: &'static str, animation: A) -> Signal<A::Frame, SyncStorage>
where
    A: Animation + Clone + Send + 'static,
    A::Frame: Send + Sync + 'static,
{
    let frame_interval = use_loader_settings().animation.frame_interval();
    let driven = use_frames_driven();
    let mut frame = use_signal_sync(|| {
        if driven {
            animation.sample(Duration::ZERO)
        } else {
            animation.settled()
        }
    });

    let handle = use_hook(|| {
        let handle = start_animation(label, animation.clone(), frame_interval, move |next| {
            // The scope may already be gone when a late frame lands.
            if let Ok(mut current) = frame.try_write() {
                *current = next;
            }
        });
        Rc::new(RefCell::new(handle))
    });

    use_drop({
        let handle: Rc<RefCell<AnimationHandle>> = handle.clone();
        move || handle.borrow_mut().stop()
    });

    frame
}
