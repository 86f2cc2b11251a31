//! Plain-text rendering of itineraries.
//!
//! Each ride is one line of output; a `change at` line sits between rides.
//! Line names can be highlighted with the line's colour using 24-bit ANSI
//! escapes.

use std::fmt::Write;

use crate::domain::{Itinerary, LineId, RideSegment};
use crate::network::Network;

const RESET: &str = "\x1b[0m";

/// Renders itineraries against the network they were planned on.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    network: &'a Network,
    colour: bool,
}

impl<'a> Renderer<'a> {
    /// Create a renderer. With `colour` off the output is plain ASCII text.
    pub fn new(network: &'a Network, colour: bool) -> Self {
        Self { network, colour }
    }

    /// One line per ride with transfer markers between them.
    ///
    /// An empty itinerary renders as an empty string.
    pub fn itinerary(&self, itinerary: &Itinerary) -> String {
        let mut out = String::new();
        for (i, ride) in itinerary.rides().iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out, "change at {}", self.network.station_name(ride.board));
            }
            let _ = writeln!(out, "{}", self.ride(ride));
        }
        out
    }

    /// A single ride.
    ///
    /// `<Line> towards <next> to <final> (<n> stops)`, or `<Line> to <final>`
    /// when the ride is one stop.
    pub fn ride(&self, ride: &RideSegment) -> String {
        let line = self.line_label(ride.line);
        let alight = self.network.station_name(ride.alight);
        if ride.is_single_stop() {
            format!("{line} to {alight}")
        } else {
            let towards = self.network.station_name(ride.towards);
            format!("{line} towards {towards} to {alight} ({} stops)", ride.stops)
        }
    }

    /// The line name, in the line's colour when enabled.
    pub fn line_label(&self, id: LineId) -> String {
        let name = self.network.line_name(id);
        let line = match self.network.line(id) {
            Some(line) if self.colour => line,
            _ => return name,
        };

        let (r, g, b) = line.colour.rgb();
        // 30 = black, 97 = bright white
        let fg = if line.colour.is_light() { 30 } else { 97 };
        format!("\x1b[48;2;{r};{g};{b}m\x1b[{fg}m {name} {RESET}")
    }
}
