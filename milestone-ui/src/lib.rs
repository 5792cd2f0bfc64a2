//! Giao diện "How Long Since AI?" cho môi trường WebAssembly.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg(target_arch = "wasm32")]
mod styles;

use milestone_core::MilestoneConfig;
use serde::Deserialize;

/// Cấu hình truyền từ JavaScript; trường nào thiếu thì giữ mặc định.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, Default, Deserialize)]
struct JsMilestoneConfig {
    #[serde(default)]
    events_url: Option<String>,
}

impl From<JsMilestoneConfig> for MilestoneConfig {
    fn from(cfg: JsMilestoneConfig) -> Self {
        let mut base = MilestoneConfig::default();
        if let Some(url) = cfg.events_url.filter(|url| !url.trim().is_empty()) {
            base.events_url = url;
        }
        base
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::{content, styles, JsMilestoneConfig};
    use chrono::{DateTime, Utc};
    use milestone_core::{
        Category, CategoryVisibility, MilestoneConfig, MilestoneError, MilestoneEvent,
        ViewAction, ViewState,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{console, Document, Element, Response, Window};
    use yew::prelude::*;

    struct AppState(ViewState);

    impl Reducible for AppState {
        type Action = ViewAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            let mut next = self.0.clone();
            if next.apply(action) {
                Rc::new(AppState(next))
            } else {
                self
            }
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct MilestoneViewProps {
        pub config: MilestoneConfig,
    }

    #[function_component(MilestoneView)]
    fn milestone_view(props: &MilestoneViewProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let state = use_reducer(|| AppState(ViewState::from_query(&current_search())));

        {
            let dispatcher = state.dispatcher();
            let url = props.config.events_url.clone();
            use_effect_with((), move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_events(&url).await {
                        Ok(events) => dispatcher.dispatch(ViewAction::LoadSucceeded(events)),
                        Err(err) => {
                            let message = format!("Không tải được {url}: {err}");
                            console::error_1(&JsValue::from_str(&message));
                            dispatcher.dispatch(ViewAction::LoadFailed(message));
                        }
                    }
                });
                || ()
            });
        }

        let visibility = state.0.visibility;
        use_effect_with(visibility, |visibility| {
            if let Err(err) = replace_location(visibility) {
                console::warn_1(&err);
            }
            || ()
        });

        let grouped = state.0.grouped();
        let now = Utc::now();
        let on_toggle = {
            let dispatcher = state.dispatcher();
            Callback::from(move |category: Category| dispatcher.dispatch(ViewAction::Toggle(category)))
        };

        html! {
            <div class="milestone-app">
                <header class="milestone-header">
                    <h1>{ content::TITLE }</h1>
                    <p class="milestone-tagline">
                        { content::TAGLINE[0] }<br />{ content::TAGLINE[1] }
                    </p>
                </header>
                { render_filters(&visibility, on_toggle) }
                {
                    for grouped
                        .visible_sections(&visibility)
                        .map(|(category, events)| render_section(category, events, now))
                }
                { render_faq() }
                { render_footer() }
            </div>
        }
    }

    fn render_filters(visibility: &CategoryVisibility, on_toggle: Callback<Category>) -> Html {
        html! {
            <div class="milestone-filters" role="group" aria-label="Categories">
                {
                    for Category::ALL.into_iter().map(|category| {
                        let is_active = visibility.is_visible(category);
                        let onclick = on_toggle.reform(move |_: MouseEvent| category);
                        html! {
                            <button
                                key={category.token()}
                                type="button"
                                class={classes!("filter-btn", is_active.then_some("active"))}
                                style={format!("--btn-color: {}", category.color())}
                                aria-pressed={is_active.to_string()}
                                onclick={onclick}
                            >
                                { category.title() }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn render_section(category: Category, events: &[MilestoneEvent], now: DateTime<Utc>) -> Html {
        html! {
            <section key={category.token()} class="milestone-section" data-category={category.token()}>
                <h2 style={format!("color: {}", category.color())}>{ category.title() }</h2>
                <ul class="event-list">
                    { for events.iter().map(|event| render_event(event, category, now)) }
                </ul>
            </section>
        }
    }

    fn render_event(event: &MilestoneEvent, category: Category, now: DateTime<Utc>) -> Html {
        let elapsed = event.time_since(now);
        html! {
            <li key={event.id.clone()} class="event-item">
                <span class="event-name">{ event.name.clone() }</span>
                <span class="event-desc">{ event.description.clone() }</span>
                <time
                    class="event-time"
                    datetime={event.date.format("%Y-%m-%d").to_string()}
                    title={format!("{} days", elapsed.total_days)}
                    style={format!("color: {}", category.color())}
                >
                    { elapsed.compact() }
                </time>
            </li>
        }
    }

    fn render_faq() -> Html {
        let (essay, essay_url) = content::FAQ_ESSAY;
        html! {
            <section class="milestone-faq">
                <h2>{ content::FAQ_TITLE }</h2>
                <p class="faq-intro">
                    { content::FAQ_INTRO }{" "}
                    <a href={essay_url} target="_blank" rel="noopener">{ essay }</a>
                    {" "}{ content::FAQ_OUTRO }
                </p>
                <div class="faq-grid">
                    {
                        for content::FAQ_ITEMS.iter().map(|item| html! {
                            <div class="faq-item">
                                <h3>{ item.title }</h3>
                                <span class="faq-rate">{ item.rate }</span>
                                <p>{ item.body }</p>
                            </div>
                        })
                    }
                </div>
            </section>
        }
    }

    fn render_footer() -> Html {
        let [first, second, third] = content::FOOTER;
        html! {
            <footer class="milestone-footer">
                <p class="perspective">
                    { first }<br />{ second }<br />{ third }
                </p>
            </footer>
        }
    }

    async fn fetch_events(url: &str) -> Result<Vec<MilestoneEvent>, MilestoneError> {
        let window = web_sys::window().ok_or_else(|| MilestoneError::Other("Không có window".into()))?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        if !response.ok() {
            return Err(MilestoneError::Other(format!("HTTP {}", response.status())));
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = body
            .as_string()
            .ok_or_else(|| MilestoneError::Parse("Phản hồi không phải văn bản".into()))?;

        milestone_feed::parse_events_str(&body)
    }

    fn js_error(err: JsValue) -> MilestoneError {
        MilestoneError::Other(format!("{err:?}"))
    }

    fn current_search() -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    // Ghi đè entry hiện tại, không tạo entry lịch sử mới.
    fn replace_location(visibility: &CategoryVisibility) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let pathname = window.location().pathname()?;
        let target = visibility.location_for(&pathname);
        window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&target))
    }

    #[wasm_bindgen]
    pub fn mount_milestone_view(selector: &str, config: Option<JsValue>) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                let cfg: JsMilestoneConfig = from_value(value)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
                MilestoneConfig::from(cfg)
            }
            _ => MilestoneConfig::default(),
        };

        yew::Renderer::<MilestoneView>::with_root_and_props(target, MilestoneViewProps { config })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_milestone_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_milestone_view(
    _: &str,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "milestone-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_config_overrides_only_present_fields() {
        let cfg = MilestoneConfig::from(JsMilestoneConfig {
            events_url: Some("/data/ai.json".into()),
        });
        assert_eq!(cfg.events_url, "/data/ai.json");

        let cfg = MilestoneConfig::from(JsMilestoneConfig::default());
        assert_eq!(cfg, MilestoneConfig::default());

        let cfg = MilestoneConfig::from(JsMilestoneConfig {
            events_url: Some("  ".into()),
        });
        assert_eq!(cfg, MilestoneConfig::default());
    }

    #[test]
    fn static_content_matches_page_copy() {
        assert_eq!(content::TITLE, "How Long Since AI?");
        assert_eq!(content::FAQ_ITEMS.len(), 3);
        assert!(content::FAQ_INTRO.contains("Order of Magnitude"));
    }
}
