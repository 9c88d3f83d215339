use loading_types::Animation;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::{spawn, Task};
#[cfg(target_arch = "wasm32")]
use std::{cell::Cell, rc::Rc};

/// The task behind a frame loop.
#[derive(Debug)]
enum FrameLoop {
    /// Spawned on the ambient tokio runtime.
    #[cfg(not(target_arch = "wasm32"))]
    Tokio(JoinHandle<()>),
    /// Owned by the calling component's scope and woken by browser timers.
    #[cfg(target_arch = "wasm32")]
    Scope { task: Task, done: Rc<Cell<bool>> },
}

impl FrameLoop {
    fn is_finished(&self) -> bool {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            FrameLoop::Tokio(task) => task.is_finished(),
            #[cfg(target_arch = "wasm32")]
            FrameLoop::Scope { done, .. } => done.get(),
        }
    }

    fn abort(self) {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            FrameLoop::Tokio(task) => task.abort(),
            #[cfg(target_arch = "wasm32")]
            FrameLoop::Scope { task, done } => {
                if !done.get() {
                    task.cancel();
                }
            }
        }
    }
}

/// Owns a running frame loop.
///
/// Dropping the handle stops the loop, so holding it in a component scope
/// ties the animation to that component's lifetime.
#[derive(Debug)]
pub struct AnimationHandle {
    label: &'static str,
    frame_loop: Option<FrameLoop>,
}

impl AnimationHandle {
    /// A handle with no loop behind it.
    pub fn inert(label: &'static str) -> Self {
        Self {
            label,
            frame_loop: None,
        }
    }

    /// Whether the loop is still producing frames.
    pub fn is_running(&self) -> bool {
        self.frame_loop
            .as_ref()
            .is_some_and(|frame_loop| !frame_loop.is_finished())
    }

    /// Abort the loop. The frame callback is never invoked again.
    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            if !frame_loop.is_finished() {
                tracing::debug!(animation = self.label, "stopping frame loop");
            }
            frame_loop.abort();
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Whether frame loops can be spawned from the current thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn runtime_available() -> bool {
    Handle::try_current().is_ok()
}

/// Whether frame loops can be spawned from the current thread. The browser
/// event loop is always there.
#[cfg(target_arch = "wasm32")]
pub fn runtime_available() -> bool {
    true
}

/// Run `animation` on the current tokio runtime, handing each frame to
/// `on_frame` every `frame_interval` until the animation finishes or the
/// returned handle is stopped.
///
/// The first frame is sampled at zero elapsed time. Without a runtime (for
/// example during server-side rendering) nothing is spawned and the handle
/// is inert.
#[cfg(not(target_arch = "wasm32"))]
pub fn start_animation<A, F>(
    label: &'static str,
    animation: A,
    frame_interval: Duration,
    mut on_frame: F,
) -> AnimationHandle
where
    A: Animation + Send + 'static,
    A::Frame: Send,
    F: FnMut(A::Frame) + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        tracing::debug!(animation = label, "no async runtime, animation not driven");
        return AnimationHandle::inert(label);
    };

    let frame_interval = frame_interval.max(Duration::from_millis(1));
    tracing::debug!(animation = label, ?frame_interval, "starting frame loop");

    let task = runtime.spawn(async move {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let elapsed = started.elapsed();
            on_frame(animation.sample(elapsed));
            if animation.is_finished(elapsed) {
                tracing::trace!(animation = label, ?elapsed, "frame loop finished");
                break;
            }
        }
    });

    AnimationHandle {
        label,
        frame_loop: Some(FrameLoop::Tokio(task)),
    }
}

/// Run `animation` in the current component scope, handing each frame to
/// `on_frame` roughly every `frame_interval` until the animation finishes,
/// the handle is stopped or the scope unmounts.
///
/// Must be called from inside a component.
#[cfg(target_arch = "wasm32")]
pub fn start_animation<A, F>(
    label: &'static str,
    animation: A,
    frame_interval: Duration,
    mut on_frame: F,
) -> AnimationHandle
where
    A: Animation + Send + 'static,
    A::Frame: Send,
    F: FnMut(A::Frame) + Send + 'static,
{
    let frame_interval = frame_interval.max(Duration::from_millis(1));
    tracing::debug!(animation = label, ?frame_interval, "starting frame loop");

    let done = Rc::new(Cell::new(false));
    let task = spawn({
        let done = done.clone();
        async move {
            let started = web_time::Instant::now();
            loop {
                let elapsed = started.elapsed();
                on_frame(animation.sample(elapsed));
                if animation.is_finished(elapsed) {
                    tracing::trace!(animation = label, ?elapsed, "frame loop finished");
                    break;
                }
                gloo_timers::future::sleep(frame_interval).await;
            }
            done.set(true);
        }
    });

    AnimationHandle {
        label,
        frame_loop: Some(FrameLoop::Scope { task, done }),
    }
}
