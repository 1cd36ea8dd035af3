use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::presence::Presence;

/// Tracks `visible` through an enter/exit animation of `duration_ms`. Each
/// change replaces the pending settle, so the last value wins.
#[hook]
pub fn use_presence(visible: bool, duration_ms: u32) -> Presence {
    let presence = use_state(Presence::default);
    let settle_timer = use_mut_ref(|| None::<Timeout>);

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let mut next = *presence;
                if next.set_target(*visible) {
                    presence.set(next);
                    let mut settled = next;
                    settled.settle();
                    let setter = presence.setter();
                    // Replacing the handle drops, and so cancels, any pending settle.
                    *settle_timer.borrow_mut() = Some(Timeout::new(duration_ms, move || {
                        setter.set(settled);
                    }));
                }
                || ()
            },
            visible,
        );
    }

    *presence
}
