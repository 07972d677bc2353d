use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Info => "notification-info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

pub enum NotificationAction {
    Show { message: String, severity: Severity },
    BeginExit(u64),
    Dismiss(u64),
}

/// Holds the one notification on screen. Exit and dismiss actions carry the
/// id they were scheduled for, so a replaced notification's actions are
/// ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|n| n.id)
    }
}

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { message, severity } => Rc::new(NotificationSlot {
                current: Some(Notification {
                    id: self.next_id,
                    message,
                    severity,
                    phase: Phase::Entering,
                }),
                next_id: self.next_id + 1,
            }),
            NotificationAction::BeginExit(id) if self.current_id() == Some(id) => {
                let mut slot = (*self).clone();
                if let Some(current) = slot.current.as_mut() {
                    current.phase = Phase::Leaving;
                }
                Rc::new(slot)
            }
            NotificationAction::Dismiss(id) if self.current_id() == Some(id) => Rc::new(NotificationSlot {
                current: None,
                next_id: self.next_id,
            }),
            _ => self,
        }
    }
}

/// Handle for showing notifications, provided through context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.dispatch.emit(NotificationAction::Show {
            message: message.into(),
            severity,
        });
    }
}

/// Exit and removal timers for the visible notification. Dropping this
/// cancels both.
struct DismissTimers {
    _exit: Timeout,
    _remove: Timeout,
}

impl DismissTimers {
    fn schedule(id: u64, dispatcher: UseReducerDispatcher<NotificationSlot>) -> Self {
        let exit = {
            let dispatcher = dispatcher.clone();
            Timeout::new(config::NOTIFICATION_VISIBLE_MS, move || {
                dispatcher.dispatch(NotificationAction::BeginExit(id));
            })
        };
        let remove = Timeout::new(
            config::NOTIFICATION_VISIBLE_MS + config::NOTIFICATION_EXIT_MS,
            move || dispatcher.dispatch(NotificationAction::Dismiss(id)),
        );
        Self { _exit: exit, _remove: remove }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(NotificationSlot::default);
    let notifier = {
        let dispatcher = slot.dispatcher();
        use_state(move || Notifier {
            dispatch: Callback::from(move |action| dispatcher.dispatch(action)),
        })
    };

    // A new id replaces the effect, dropping the previous notification's timers
    {
        let dispatcher = slot.dispatcher();
        use_effect_with_deps(
            move |current: &Option<u64>| {
                let timers = current.map(|id| {
                    debug!("Showing notification {}", id);
                    DismissTimers::schedule(id, dispatcher)
                });
                move || drop(timers)
            },
            slot.current_id(),
        );
    }

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            {
                if let Some(notification) = slot.current() {
                    let phase = match notification.phase {
                        Phase::Entering => "notification-enter",
                        Phase::Leaving => "notification-exit",
                    };
                    html! {
                        <div
                            key={notification.id.to_string()}
                            class={classes!("notification", notification.severity.class(), phase)}
                            role="status"
                            aria-live="polite"
                        >
                            {&notification.message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(slot: Rc<NotificationSlot>, message: &str) -> Rc<NotificationSlot> {
        slot.reduce(NotificationAction::Show {
            message: message.to_string(),
            severity: Severity::Success,
        })
    }

    #[test]
    fn second_show_replaces_the_first() {
        let slot = Rc::new(NotificationSlot::default());
        let slot = show(slot, "first");
        let slot = show(slot, "second");

        let current = slot.current().expect("a notification is visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.phase, Phase::Entering);
        assert_eq!(current.id, 1);
    }

    #[test]
    fn exit_then_dismiss_clears_the_slot() {
        let slot = show(Rc::new(NotificationSlot::default()), "saved");
        let slot = slot.reduce(NotificationAction::BeginExit(0));
        assert_eq!(slot.current().map(|n| n.phase), Some(Phase::Leaving));

        let slot = slot.reduce(NotificationAction::Dismiss(0));
        assert!(slot.current().is_none());
    }

    #[test]
    fn actions_for_a_replaced_notification_are_ignored() {
        let slot = show(Rc::new(NotificationSlot::default()), "first");
        let slot = show(slot, "second");

        let slot = slot.reduce(NotificationAction::BeginExit(0));
        let slot = slot.reduce(NotificationAction::Dismiss(0));

        let current = slot.current().expect("second notification survives");
        assert_eq!(current.message, "second");
        assert_eq!(current.phase, Phase::Entering);
    }

    #[test]
    fn ids_keep_increasing_after_dismiss() {
        let slot = show(Rc::new(NotificationSlot::default()), "one");
        let slot = slot.reduce(NotificationAction::Dismiss(0));
        let slot = show(slot, "two");
        assert_eq!(slot.current().map(|n| n.id), Some(1));
    }
}
