// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            rolling_file_appender_impl};
use tracing::dispatcher::DefaultGuard;
use tracing_core::{LevelFilter, Subscriber};
use tracing_subscriber::{Layer, Registry,
                         fmt::{self, format::{Compact, DefaultFields, Format}},
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed, type erased layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Boxed layers stacked on a [`Registry`].
pub type RegistryLayers = Vec<Box<DynLayer<Registry>>>;

/// One line per event, no timestamps, no colors. The line editor owns the terminal's
/// colors and cursor, so logs stay plain.
fn plain_fmt_layer<S>() -> fmt::Layer<S, DefaultFields, Format<Compact, ()>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
}

/// Install a subscriber built from `tracing_config`.
///
/// | [`TracingScope`] | Effect                                   | Returns              |
/// |------------------|------------------------------------------|----------------------|
/// | `Global`         | process wide, can't be replaced later    | `None`               |
/// | `ThreadLocal`    | this thread, until the guard is dropped  | `Some(DefaultGuard)` |
///
/// [`WriterConfig::None`] installs a subscriber with no layers, which records nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn init_tracing(tracing_config: TracingConfig) -> miette::Result<Option<DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(tracing_config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(match scope {
        TracingScope::Global => {
            subscriber.init();
            None
        }
        TracingScope::ThreadLocal => Some(subscriber.set_default()),
    })
}

/// Build the layers for `tracing_config` without installing them. The first layer is
/// always the [`LevelFilter`] itself, followed by a display layer and/or a file layer.
///
/// Returns `Ok(None)` for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<RegistryLayers>> {
    let level_filter = tracing_config.get_level_filter();

    let (maybe_display, maybe_file_path) = match tracing_config.writer_config {
        WriterConfig::None => return Ok(None),
        WriterConfig::Display(display_pref) => (Some(display_pref), None),
        WriterConfig::File(file_path) => (None, Some(file_path)),
        WriterConfig::DisplayAndFile(display_pref, file_path) => {
            (Some(display_pref), Some(file_path))
        }
    };

    let mut layers: RegistryLayers = Vec::new();
    layers.push(Box::new(level_filter));

    if let Some(display_pref) = maybe_display {
        layers.push(create_display_layer(display_pref, level_filter));
    }

    if let Some(file_path) = maybe_file_path {
        layers.push(try_create_file_layer(&file_path, level_filter)?);
    }

    Ok(Some(layers))
}

/// Layer that writes to stdout or stderr. Don't point this at the terminal a line is
/// being edited on.
#[must_use]
pub fn create_display_layer<S>(
    display_pref: DisplayPreference,
    level_filter: LevelFilter,
) -> Box<DynLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match display_pref {
        DisplayPreference::Stdout => Box::new(
            plain_fmt_layer::<S>()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            plain_fmt_layer::<S>()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// Layer that appends to the file at `file_path`. The file is created right away.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    file_path: &str,
    level_filter: LevelFilter,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let appender = rolling_file_appender_impl::try_create(file_path)?;
    Ok(Box::new(
        plain_fmt_layer::<S>()
            .with_writer(appender)
            .with_filter(level_filter),
    ))
}
