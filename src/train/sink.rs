use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::train::epoch_report::EpochReport;

/// Receives progress reports from the training loop.
pub trait ProgressSink {
    fn report<const F: usize, const H: usize, const O: usize>(
        &mut self,
        report: &EpochReport<'_, F, H, O>,
    );
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn report<const F: usize, const H: usize, const O: usize>(
        &mut self,
        _report: &EpochReport<'_, F, H, O>,
    ) {
    }
}

/// Logs reports through `tracing`: one `info` line per report, node values
/// and connection weights at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn report<const F: usize, const H: usize, const O: usize>(
        &mut self,
        report: &EpochReport<'_, F, H, O>,
    ) {
        info!(epoch = report.epoch, error = report.error, "training progress");

        for (node, (value, bias)) in report.hidden.iter().zip(report.hidden_bias).enumerate() {
            debug!(node, value, bias, "hidden node");
        }
        for (node, (value, bias)) in report.output.iter().zip(report.output_bias).enumerate() {
            debug!(node, value, bias, "output node");
        }

        if let Some(weights) = report.input_to_hidden {
            for (from, row) in weights.iter_rows().enumerate() {
                for (to, weight) in row.iter().enumerate() {
                    debug!(from, to, weight, "input-to-hidden connection");
                }
            }
        }
        if let Some(weights) = report.hidden_to_output {
            for (from, row) in weights.iter_rows().enumerate() {
                for (to, weight) in row.iter().enumerate() {
                    debug!(from, to, weight, "hidden-to-output connection");
                }
            }
        }
    }
}

/// Writes each report as one JSON object per line.
///
/// Write failures are logged and the report is dropped; training never stops
/// because a sink failed.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> JsonSink<W> {
        JsonSink { writer }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> ProgressSink for JsonSink<W> {
    fn report<const F: usize, const H: usize, const O: usize>(
        &mut self,
        report: &EpochReport<'_, F, H, O>,
    ) {
        if let Err(e) = self.write_line(report) {
            warn!(epoch = report.epoch, error = %e, "dropping progress report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::dense::Layer;
    use crate::math::matrix::Matrix;
    use crate::network::network::Network;

    fn network() -> Network<2, 2, 1> {
        let hidden = Layer::from_parts(Matrix::from_data([[0.5, 0.5], [0.5, 0.5]]), [0.0, 0.0]);
        let output = Layer::from_parts(Matrix::from_data([[0.5], [0.5]]), [0.25]);
        Network::from_layers(hidden, output)
    }

    #[test]
    fn json_sink_writes_one_line_per_report() {
        let network = network();
        let mut sink = JsonSink::new(Vec::new());
        sink.report(&EpochReport::of(&network, 1000, false));
        sink.report(&EpochReport::of(&network, 1500, true));

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let periodic: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(periodic["epoch"], 1000);
        assert_eq!(periodic["error"], 1.0);
        assert_eq!(periodic["output_bias"], serde_json::json!([0.25]));
        assert!(periodic.get("input_to_hidden").is_none());

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["input_to_hidden"], serde_json::json!([[0.5, 0.5], [0.5, 0.5]]));
        assert_eq!(last["hidden_to_output"], serde_json::json!([[0.5], [0.5]]));
    }

    #[test]
    fn tracing_sink_accepts_reports_without_subscriber() {
        let network = network();
        TracingSink.report(&EpochReport::of(&network, 1, true));
    }
}
