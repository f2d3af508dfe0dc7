// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::pico::Container;
use screens::news::NewsScreen;
use screens::news_ico::NewsIcoScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
enum Screen {
    #[default]
    News,
    NewsIco,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::News => "News",
            Screen::NewsIco => "News & ICO",
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 2] = [Screen::News, Screen::NewsIco];

/// The navigation tabs component.
#[component]
fn Tabs(mut active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        text-decoration: none;
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .news-list { list-style: none; padding-left: 0; }
    .news-list li { margin-bottom: 0.5rem; }
    .news-icon { margin-right: 0.5rem; }
    .search-error { color: var(--pico-del-color); }

    .badge { border-radius: var(--pico-border-radius); padding: 0.1rem 0.5rem; font-size: 0.85em; }
    .badge-positive { background-color: var(--pico-ins-color); color: #fff; }
    .badge-negative { background-color: var(--pico-del-color); color: #fff; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Settings are read once; there is no server round-trip.
    let app_state = use_hook(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    rsx! {
        LoadedApp {
            app_state,
        }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_context_provider(|| app_state.clone());

    let active_screen = use_signal(Screen::default);

    rsx! {
        Container {
            header {
                Tabs {
                    active_screen,
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::News => rsx! {
                        NewsScreen {}
                    },
                    Screen::NewsIco => rsx! {
                        NewsIcoScreen {}
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_have_distinct_names() {
        let names: Vec<_> = ALL_SCREENS.iter().map(Screen::name).collect();
        assert_eq!(names, ["News", "News & ICO"]);
        assert_eq!(Screen::default(), Screen::News);
    }
}
