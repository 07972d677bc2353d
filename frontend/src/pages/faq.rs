use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::Analytics;
use crate::content::FAQ;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTransition {
    Expanded,
    Collapsed,
}

/// Which FAQ panel is open, if any. Holding a single index keeps every other
/// panel collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<usize>,
}

impl AccordionState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, panel: usize) -> bool {
        self.expanded == Some(panel)
    }

    /// Clicking the open panel closes everything. Clicking a closed panel
    /// closes the others and opens it.
    pub fn toggle(&mut self, panel: usize) -> PanelTransition {
        let was_expanded = self.is_expanded(panel);
        if was_expanded {
            self.expanded = None;
            PanelTransition::Collapsed
        } else {
            self.expanded = Some(panel);
            PanelTransition::Expanded
        }
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let state = use_state_eq(AccordionState::default);

    let panels = FAQ.iter().enumerate().map(|(index, entry)| {
        let expanded = state.is_expanded(index);
        let onclick = {
            let state = state.clone();
            let analytics = analytics.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = *state;
                let transition = next.toggle(index);
                debug!("FAQ panel {} {:?}, open panel now {:?}", index, transition, next.expanded());
                state.set(next);
                if transition == PanelTransition::Expanded {
                    analytics.emit("FAQ", "faq_open", entry.question, None);
                }
            })
        };

        html! {
            <div class="faq-item">
                <button
                    class="faq-question"
                    aria-expanded={expanded.to_string()}
                    aria-controls={format!("faq-answer-{}", index)}
                    {onclick}
                >
                    <span>{entry.question}</span>
                    <span class="faq-icon">{if expanded { "−" } else { "+" }}</span>
                </button>
                <div id={format!("faq-answer-{}", index)} class={classes!("faq-answer", expanded.then_some("active"))}>
                    <p>{entry.answer}</p>
                </div>
            </div>
        }
    });

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for panels }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: &AccordionState, panels: usize) -> usize {
        (0..panels).filter(|&i| state.is_expanded(i)).count()
    }

    #[test]
    fn clicking_closed_panel_opens_only_that_panel() {
        let mut state = AccordionState::default();
        assert_eq!(state.toggle(2), PanelTransition::Expanded);
        assert_eq!(state.expanded(), Some(2));

        assert_eq!(state.toggle(0), PanelTransition::Expanded);
        assert_eq!(state.expanded(), Some(0));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn clicking_open_panel_closes_everything() {
        let mut state = AccordionState::default();
        state.toggle(1);
        assert_eq!(state.toggle(1), PanelTransition::Collapsed);
        assert_eq!(open_count(&state, 5), 0);
    }

    #[test]
    fn at_most_one_panel_open_after_any_click_sequence() {
        let clicks = [0, 3, 3, 1, 4, 4, 4, 2, 0, 0, 1, 3];
        let mut state = AccordionState::default();
        for panel in clicks {
            state.toggle(panel);
            assert!(open_count(&state, 5) <= 1);
        }
    }

    #[test]
    fn only_expanding_reports_expanded() {
        let mut state = AccordionState::default();
        let transitions: Vec<_> = [1, 1, 1].iter().map(|&p| state.toggle(p)).collect();
        assert_eq!(
            transitions,
            vec![
                PanelTransition::Expanded,
                PanelTransition::Collapsed,
                PanelTransition::Expanded
            ]
        );
    }
}
