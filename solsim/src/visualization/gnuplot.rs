//! Gnuplot animation output
//!
//! Writes a gnuplot script that renders every frame into an animated GIF:
//! the sun as a yellow point, planets as blue points and each planet's trail
//! as a light-blue line. Frames go through inline `'-'` data blocks, so the
//! script can be piped straight into `gnuplot -persist` or saved to a file.

use std::io::{BufWriter, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::{debug, info, warn};

use crate::configuration::config::RenderConfig;
use crate::error::SinkError;
use crate::simulation::frame::Frame;
use crate::visualization::sink::FrameSink;

const GNUPLOT: &str = "gnuplot";

const PLOT_LINE: &str = "plot '-' with points pt 7 ps 2 lc rgb 'yellow' title 'Sun', \
'-' with points pt 7 ps 1.5 lc rgb 'blue' title 'Planets', \
'-' with lines lc rgb 'light-blue' title 'Planet Trails'";

/// Escape for a single-quoted gnuplot string, where `''` is a literal quote
fn quoted(s: &str) -> String {
    s.replace('\'', "''")
}

/// Frame sink speaking the gnuplot script format
pub struct GnuplotSink<W: Write> {
    out: Option<W>,
    child: Option<Child>, // set when we own the gnuplot process
}

impl GnuplotSink<BufWriter<ChildStdin>> {
    /// Launch `gnuplot -persist` and stream the animation into it
    pub fn spawn(render: &RenderConfig, size: f64) -> Result<Self, SinkError> {
        let mut child = Command::new(GNUPLOT)
            .arg("-persist")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| SinkError::Spawn { program: GNUPLOT.to_string(), source })?;

        let stdin = child.stdin.take().ok_or(SinkError::Closed)?;
        info!(output = %render.output.display(), "started gnuplot");

        let mut sink = Self::from_writer(BufWriter::new(stdin), render, size)?;
        sink.child = Some(child);
        Ok(sink)
    }
}

impl<W: Write> GnuplotSink<W> {
    /// Write the animation header to `out` and use it for the frames
    pub fn from_writer(mut out: W, render: &RenderConfig, size: f64) -> Result<Self, SinkError> {
        let half = size / 2.0;
        writeln!(out, "set terminal gif animate delay {} size {},{}", render.delay, render.width, render.height)?;
        writeln!(out, "set output '{}'", quoted(&render.output.display().to_string()))?;
        writeln!(out, "set xrange [-{half:.6}:{half:.6}]")?;
        writeln!(out, "set yrange [-{half:.6}:{half:.6}]")?;
        writeln!(out, "unset key")?;
        writeln!(out, "set title '{}'", quoted(&render.title))?;

        Ok(Self { out: Some(out), child: None })
    }

    /// Give back the underlying writer, leaving the sink closed
    pub fn into_inner(mut self) -> Option<W> {
        self.out.take()
    }
}

impl<W: Write> FrameSink for GnuplotSink<W> {
    fn emit(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        let out = self.out.as_mut().ok_or(SinkError::Closed)?;

        writeln!(out, "{PLOT_LINE}")?;

        // Sun
        writeln!(out, "{:.6} {:.6}", frame.sun.x, frame.sun.y)?;
        writeln!(out, "e")?;

        // Planets
        for p in frame.positions() {
            writeln!(out, "{:.6} {:.6}", p.x, p.y)?;
        }
        writeln!(out, "e")?;

        // Trails, one block per planet
        for trail in frame.trails() {
            for p in trail {
                writeln!(out, "{:.6} {:.6}", p.x, p.y)?;
            }
            writeln!(out)?;
        }
        writeln!(out, "e")?;

        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
        }
        if let Some(mut child) = self.child.take() {
            // gnuplot only finishes the gif once its stdin closes
            drop(self.out.take());
            let status = child.wait()?;
            debug!(%status, "gnuplot exited");
        }
        Ok(())
    }
}

impl<W: Write> Drop for GnuplotSink<W> {
    // Reap gnuplot when `finish` was skipped, e.g. after a failed write
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            drop(self.out.take());
            match child.wait() {
                Ok(status) => debug!(%status, "gnuplot exited"),
                Err(err) => warn!("failed to wait for gnuplot: {err}"),
            }
        }
    }
}
