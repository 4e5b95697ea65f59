// gradient.rs
//
// Parser for the compact radial-gradient descriptor used by orbit configs:
//
//   "<sx>% <sy>% at <px>% <py>%, <color> <offset>%, <color> <offset>%, ..."
//
// e.g. "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%"
//
// Stops are tokenized by locating each segment's trailing percentage, so
// functional color notations containing commas (rgba, hsl, ...) survive as a
// single color token instead of being split apart.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GradientParseError {
    #[error("malformed gradient head {0:?}: expected \"<sx>% <sy>% at <px>% <py>%\"")]
    MalformedHead(String),

    #[error("invalid percentage {0:?}")]
    InvalidPercentage(String),

    #[error("gradient stop {0:?} has no trailing percentage offset")]
    MissingOffset(String),

    #[error("gradient needs at least two stops, got {0}")]
    TooFewStops(usize),
}

/// One color stop, offset as a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: String,
}

/// Parsed radial gradient: ellipse scale, center position and color stops,
/// all percentages converted to fractions. Stop order matches input order.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub scale_x: f32,
    pub scale_y: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub stops: Vec<GradientStop>,
}

impl GradientSpec {
    pub fn parse(spec: &str) -> Result<Self, GradientParseError> {
        let (head, rest) = match spec.split_once(',') {
            Some((head, rest)) => (head, rest),
            None => (spec, ""),
        };

        let tokens: Vec<&str> = head.split_whitespace().collect();
        if tokens.len() != 5 || tokens[2] != "at" {
            return Err(GradientParseError::MalformedHead(head.trim().to_string()));
        }
        let scale_x = percentage(tokens[0])?;
        let scale_y = percentage(tokens[1])?;
        let center_x = percentage(tokens[3])?;
        let center_y = percentage(tokens[4])?;

        let stops = parse_stops(rest)?;
        if stops.len() < 2 {
            return Err(GradientParseError::TooFewStops(stops.len()));
        }

        Ok(Self {
            scale_x,
            scale_y,
            center_x,
            center_y,
            stops,
        })
    }
}

/// Convert a "<number>%" token to a fraction.
fn percentage(token: &str) -> Result<f32, GradientParseError> {
    let number = token
        .strip_suffix('%')
        .ok_or_else(|| GradientParseError::InvalidPercentage(token.to_string()))?;
    number
        .trim()
        .parse::<f32>()
        .map(|v| v / 100.0)
        .map_err(|_| GradientParseError::InvalidPercentage(token.to_string()))
}

/// Split the stop list on commas, re-joining pieces until a segment both ends
/// in a percentage and has balanced parentheses. This keeps multi-argument
/// color functions intact.
fn parse_stops(rest: &str) -> Result<Vec<GradientStop>, GradientParseError> {
    let mut stops = Vec::new();
    let mut current = String::new();

    for piece in rest.split(',') {
        if !current.is_empty() {
            current.push(',');
        }
        current.push_str(piece);

        let balanced = current.matches('(').count() == current.matches(')').count();
        if balanced && current.trim_end().ends_with('%') {
            stops.push(parse_stop(current.trim())?);
            current.clear();
        }
    }

    let leftover = current.trim();
    if !leftover.is_empty() {
        return Err(GradientParseError::MissingOffset(leftover.to_string()));
    }

    Ok(stops)
}

fn parse_stop(segment: &str) -> Result<GradientStop, GradientParseError> {
    // The offset is the last space-separated token; everything before it is
    // the color, commas and all.
    let (color, offset_token) = segment
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| GradientParseError::MissingOffset(segment.to_string()))?;
    Ok(GradientStop {
        offset: percentage(offset_token)?,
        color: color.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%";

    #[test]
    fn parses_reference_gradient() {
        let g = GradientSpec::parse(REFERENCE).unwrap();
        assert!((g.scale_x - 0.65).abs() < 1e-6);
        assert!((g.scale_y - 0.5).abs() < 1e-6);
        assert!((g.center_x - 0.5).abs() < 1e-6);
        assert!((g.center_y - 0.5).abs() < 1e-6);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0], GradientStop { offset: 0.0, color: "#6E40F2".into() });
        assert_eq!(g.stops[1], GradientStop { offset: 1.0, color: "rgba(110, 64, 242, 0)".into() });
    }

    #[test]
    fn color_function_with_percentage_arguments() {
        let g = GradientSpec::parse("50% 50% at 50% 50%, rgb(100%, 0%, 0%) 10%, hsl(270, 60%, 70%) 90%")
            .unwrap();
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, "rgb(100%, 0%, 0%)");
        assert!((g.stops[0].offset - 0.1).abs() < 1e-6);
        assert_eq!(g.stops[1].color, "hsl(270, 60%, 70%)");
        assert!((g.stops[1].offset - 0.9).abs() < 1e-6);
    }

    #[test]
    fn stop_order_is_preserved() {
        let g = GradientSpec::parse("10% 20% at 30% 40%, #fff 80%, #000 20%").unwrap();
        assert!((g.stops[0].offset - 0.8).abs() < 1e-6);
        assert!((g.stops[1].offset - 0.2).abs() < 1e-6);
    }

    #[test]
    fn missing_at_keyword_fails() {
        let err = GradientSpec::parse("65% 50% 50% 50%, #fff 0%, #000 100%").unwrap_err();
        assert!(matches!(err, GradientParseError::MalformedHead(_)));
    }

    #[test]
    fn missing_percentage_in_head_fails() {
        let err = GradientSpec::parse("65% at 50% 50%, #fff 0%, #000 100%").unwrap_err();
        assert!(matches!(err, GradientParseError::MalformedHead(_)));
    }

    #[test]
    fn non_numeric_percentage_fails() {
        let err = GradientSpec::parse("x% 50% at 50% 50%, #fff 0%, #000 100%").unwrap_err();
        assert_eq!(err, GradientParseError::InvalidPercentage("x%".into()));
    }

    #[test]
    fn single_stop_fails() {
        let err = GradientSpec::parse("65% 50% at 50% 50%, #6E40F2 0%").unwrap_err();
        assert_eq!(err, GradientParseError::TooFewStops(1));
    }

    #[test]
    fn no_stops_fails() {
        let err = GradientSpec::parse("65% 50% at 50% 50%").unwrap_err();
        assert_eq!(err, GradientParseError::TooFewStops(0));
    }

    #[test]
    fn stop_without_offset_fails() {
        let err = GradientSpec::parse("65% 50% at 50% 50%, #fff 0%, #000").unwrap_err();
        assert_eq!(err, GradientParseError::MissingOffset("#000".into()));
    }
}
