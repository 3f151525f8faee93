//! Forward tracing events to the browser console.
//!
//! [`ConsoleLayer`] renders each event as `target: message key=value ...` and
//! writes it with the console method matching its level, so the browser's
//! own level filter works on component logs.

use std::fmt::{Debug, Write};
use std::str::FromStr;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Level used when none (or an unknown one) is given
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Render an event into a single console line
pub fn render_event(event: &Event<'_>) -> String {
    struct MsgVisitor {
        msg: Option<String>,
        fields: String,
    }
    impl Visit for MsgVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "message" {
                self.msg = Some(value.to_string());
            } else {
                let _ = write!(&mut self.fields, " {}=\"{}\"", field.name(), value);
            }
        }
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            if field.name() == "message" {
                self.msg = Some(format!("{:?}", value));
            } else {
                let _ = write!(&mut self.fields, " {}={:?}", field.name(), value);
            }
        }
    }

    let mut visitor = MsgVisitor {
        msg: None,
        fields: String::new(),
    };
    event.record(&mut visitor);

    format!(
        "{}: {}{}",
        event.metadata().target(),
        visitor.msg.unwrap_or_default(),
        visitor.fields
    )
}

/// Tracing layer writing to `console.*`
pub struct ConsoleLayer;

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = JsValue::from_str(&render_event(event));
        match *event.metadata().level() {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            Level::DEBUG => console::debug_1(&line),
            Level::TRACE => console::log_1(&line),
        }
    }
}

/// Install the console subscriber and, with the default feature, the panic
/// hook
///
/// `level` is a tracing level name (`"debug"`, `"warn"`, ...). Calling this
/// more than once keeps the first subscriber.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let filter = level
        .as_deref()
        .and_then(|name| LevelFilter::from_str(name).ok())
        .unwrap_or(DEFAULT_LEVEL);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("logging already initialized");
    }
}
