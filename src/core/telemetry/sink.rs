use crate::error::Result;

use super::assembler::Report;

/// Destination for an assembled report.
///
/// The console writer, the JSON writer and the dashboard board all implement
/// this; the assembler never knows which one it is feeding.
pub trait PresentationSink {
    fn present(&mut self, report: &Report) -> Result<()>;
}
