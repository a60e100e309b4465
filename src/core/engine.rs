use crate::core::builder::SkylineBuilder;
use crate::core::verify;
use crate::domain::model::SkylineReport;
use crate::domain::ports::{PointSource, SkylineSink};
use crate::utils::error::{Result, SkylineError};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_y_floor;
use chrono::Utc;
use std::time::Instant;

/// Runs one skyline job: read, validate, build, optionally verify, write.
pub struct SkylineEngine<S: PointSource, W: SkylineSink> {
    source: S,
    sink: W,
    builder: SkylineBuilder,
    verify: bool,
    monitor: SystemMonitor,
}

impl<S: PointSource, W: SkylineSink> SkylineEngine<S, W> {
    pub fn new(source: S, sink: W, builder: SkylineBuilder) -> Self {
        Self {
            source,
            sink,
            builder,
            verify: false,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(
        source: S,
        sink: W,
        builder: SkylineBuilder,
        enable_monitoring: bool,
    ) -> Self {
        Self {
            monitor: SystemMonitor::new(enable_monitoring),
            ..Self::new(source, sink, builder)
        }
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    pub fn run(&mut self) -> Result<SkylineReport> {
        tracing::info!("🚀 Starting skyline computation");
        self.monitor.log_stats("Start");

        let points = self.source.read_points()?;
        let input_count = points.len();
        tracing::info!("📥 Read {} points", input_count);
        self.monitor.log_stats("Read");

        if let Some(floor) = self.builder.y_floor() {
            validate_y_floor(&points, floor)?;
        }

        // 只有開啟驗證時才保留輸入副本
        let original = self.verify.then(|| points.clone());

        let started = Instant::now();
        let skyline = self.builder.build(points);
        let elapsed = started.elapsed();
        tracing::info!(
            "🏙️  Skyline has {} of {} points ({:?})",
            skyline.len(),
            input_count,
            elapsed
        );
        self.monitor.log_stats("Build");

        if let Some(original) = original {
            if let Some(message) = verify::find_violation(&original, &skyline) {
                tracing::error!("❌ Verification failed: {}", message);
                return Err(SkylineError::VerificationError { message });
            }
            tracing::info!("✅ Skyline verified against {} input points", input_count);
        }

        let report = SkylineReport {
            input_count,
            skyline,
            strategy: self.builder.strategy(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            generated_at: Utc::now(),
        };

        self.sink.write_skyline(&report)?;
        self.monitor.log_final_stats();

        Ok(report)
    }
}
