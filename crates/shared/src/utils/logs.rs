use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(component: &str, is_dev: bool, enable_file: bool, log_dir: Option<&str>) {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_dev {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let console_layer = fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let file_layer = if enable_file {
        let log_dir = log_dir.unwrap_or(if is_dev { "./logs" } else { "/var/log/app" });
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
