#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-milestone-ui]";

/// Default CSS for the page along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --milestone-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --milestone-bg: #0b0d12;
  --milestone-text: #e6e8ee;
  --milestone-muted: #8a90a2;
  --milestone-rule: rgba(255, 255, 255, 0.08);
  --milestone-card-bg: rgba(255, 255, 255, 0.03);
  --milestone-radius: 12px;
}

body {
  margin: 0;
  background: var(--milestone-bg);
}

.milestone-app {
  font-family: var(--milestone-font-family);
  color: var(--milestone-text);
  max-width: 760px;
  margin: 0 auto;
  padding: 56px 24px 80px;
}

.milestone-header h1 {
  font-size: 2.6rem;
  letter-spacing: -0.02em;
  margin: 0 0 12px;
}

.milestone-tagline {
  color: var(--milestone-muted);
  font-size: 1.1rem;
  line-height: 1.6;
  margin: 0 0 32px;
}

.milestone-filters {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
  margin-bottom: 36px;
}

.filter-btn {
  --btn-color: var(--milestone-muted);
  background: transparent;
  border: 1px solid var(--milestone-rule);
  border-radius: 999px;
  color: var(--milestone-muted);
  cursor: pointer;
  font: inherit;
  font-weight: 600;
  padding: 6px 16px;
  transition: color 120ms ease, border-color 120ms ease, background 120ms ease;
}

.filter-btn:hover {
  border-color: var(--btn-color);
}

.filter-btn.active {
  border-color: var(--btn-color);
  color: var(--btn-color);
  background: color-mix(in srgb, var(--btn-color) 12%, transparent);
}

.milestone-section {
  margin-bottom: 40px;
}

.milestone-section h2 {
  font-size: 0.85rem;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  margin: 0 0 12px;
}

.event-list {
  list-style: none;
  margin: 0;
  padding: 0;
}

.event-item {
  display: grid;
  grid-template-columns: minmax(140px, 0.8fr) 2fr auto;
  gap: 16px;
  align-items: baseline;
  padding: 12px 0;
  border-bottom: 1px solid var(--milestone-rule);
}

.event-name {
  font-weight: 600;
}

.event-desc {
  color: var(--milestone-muted);
  font-size: 0.92rem;
}

.event-time {
  font-variant-numeric: tabular-nums;
  font-weight: 700;
  white-space: nowrap;
}

.milestone-faq {
  margin-top: 64px;
  padding-top: 32px;
  border-top: 1px solid var(--milestone-rule);
}

.faq-intro {
  color: var(--milestone-muted);
  line-height: 1.6;
}

.faq-intro a {
  color: var(--milestone-text);
}

.faq-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 16px;
  margin-top: 20px;
}

.faq-item {
  background: var(--milestone-card-bg);
  border: 1px solid var(--milestone-rule);
  border-radius: var(--milestone-radius);
  padding: 16px;
}

.faq-item h3 {
  margin: 0 0 4px;
}

.faq-rate {
  color: var(--milestone-muted);
  font-size: 0.82rem;
  font-weight: 600;
}

.faq-item p {
  color: var(--milestone-muted);
  font-size: 0.9rem;
  line-height: 1.5;
}

.milestone-footer {
  margin-top: 56px;
  text-align: center;
}

.perspective {
  color: var(--milestone-muted);
  font-style: italic;
  line-height: 1.7;
}

@media (max-width: 640px) {
  .event-item {
    grid-template-columns: 1fr auto;
  }

  .event-desc {
    grid-column: 1 / -1;
    grid-row: 2;
  }

  .faq-grid {
    grid-template-columns: 1fr;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-milestone-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
