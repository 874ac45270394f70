// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/gesture.rs
//
// Scripted pointer gestures, e.g. `260,100:280,80`.

use std::str::FromStr;

use anyhow::{Context, bail};

use crate::app::message::OverlayMessage;
use crate::domain::geometry::Point;

/// One pointer session: down at the first point, through the rest, up at
/// the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    points: Vec<Point>,
}

impl Gesture {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The pointer messages this gesture produces.
    pub fn messages(&self) -> Vec<OverlayMessage> {
        let Some((first, rest)) = self.points.split_first() else {
            return Vec::new();
        };

        let mut messages = vec![OverlayMessage::PointerDown {
            x: first.x,
            y: first.y,
        }];
        messages.extend(
            rest.iter()
                .map(|p| OverlayMessage::PointerMove { x: p.x, y: p.y }),
        );
        let last = self.points.last().unwrap_or(first);
        messages.push(OverlayMessage::PointerUp {
            x: last.x,
            y: last.y,
        });
        messages
    }
}

impl FromStr for Gesture {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split(':')
            .map(|pair| {
                let (x, y) = pair
                    .split_once(',')
                    .with_context(|| format!("Expected X,Y but got '{pair}'"))?;
                let x: f32 = x.trim().parse().with_context(|| format!("Bad x in '{pair}'"))?;
                let y: f32 = y.trim().parse().with_context(|| format!("Bad y in '{pair}'"))?;
                Ok(Point::new(x, y))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if points.len() < 2 {
            bail!("A gesture needs at least two points, got '{s}'");
        }
        Ok(Self { points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_and_expands_to_messages() {
        let gesture: Gesture = "260,100:270,90:280,80".parse().expect("parse");
        assert_eq!(gesture.points().len(), 3);

        let messages = gesture.messages();
        assert_eq!(
            messages,
            vec![
                OverlayMessage::PointerDown { x: 260.0, y: 100.0 },
                OverlayMessage::PointerMove { x: 270.0, y: 90.0 },
                OverlayMessage::PointerMove { x: 280.0, y: 80.0 },
                OverlayMessage::PointerUp { x: 280.0, y: 80.0 },
            ]
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("260,100".parse::<Gesture>().is_err());
        assert!("260;100:1,2".parse::<Gesture>().is_err());
        assert!("a,b:1,2".parse::<Gesture>().is_err());
    }
}
