use std::fmt;

use planar_types::{GeoPoint, LineString, MultiPolygon, PlanarPoint, Polygon, Rect, Ring, Segment, XyPoint};

/// WKT parse failure, carrying the byte offset where parsing stopped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WktError {
    pub position: usize,
    pub message: String,
}

impl fmt::Display for WktError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WKT parse error at byte {}: {}", self.position, self.message)
    }
}

impl std::error::Error for WktError {}

/// Deserialization from WKT.
///
/// Tags are case-sensitive (`POINT`, `SEGMENT`, `BOX`, `LINESTRING`,
/// `LINEARRING`, `POLYGON`, `MULTIPOLYGON`); coordinates are decimal floats
/// separated by a space, points separated by commas. Input after the closing
/// parenthesis is ignored.
pub trait FromWkt: Sized {
    fn from_wkt(wkt: &str) -> Result<Self, WktError>;
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> WktError {
        WktError {
            position: self.pos,
            message: message.into(),
        }
    }

    fn skip_spaces(&mut self) {
        while self.input.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
    }

    fn expect_byte(&mut self, byte: u8) -> Result<(), WktError> {
        if self.input.get(self.pos) == Some(&byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", byte as char)))
        }
    }

    fn expect_tag(&mut self, tag: &str) -> Result<(), WktError> {
        if self.input[self.pos..].starts_with(tag.as_bytes()) {
            self.pos += tag.len();
            Ok(())
        } else {
            Err(self.error(format!("expected tag '{tag}'")))
        }
    }

    fn number(&mut self) -> Result<f64, WktError> {
        let start = self.pos;
        let mut end = self.pos;

        if matches!(self.input.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        while matches!(self.input.get(end), Some(b'0'..=b'9') | Some(b'.')) {
            end += 1;
        }
        if matches!(self.input.get(end), Some(b'e') | Some(b'E')) {
            let mut exp_end = end + 1;
            if matches!(self.input.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            if matches!(self.input.get(exp_end), Some(b'0'..=b'9')) {
                while matches!(self.input.get(exp_end), Some(b'0'..=b'9')) {
                    exp_end += 1;
                }
                end = exp_end;
            }
        }

        let text = std::str::from_utf8(&self.input[start..end])
            .map_err(|_| self.error("invalid number"))?;
        let value: f64 = text
            .parse()
            .map_err(|_| self.error("invalid number"))?;
        self.pos = end;
        Ok(value)
    }

    fn point<P: PlanarPoint>(&mut self) -> Result<P, WktError> {
        self.skip_spaces();
        let x = self.number()?;
        self.expect_byte(b' ')?;
        self.skip_spaces();
        let y = self.number()?;
        Ok(P::from_xy(x, y))
    }

    /// Runs `parse`; on failure the position is rolled back and `None`
    /// returned. This is the backtracking the comma-separated lists rely on.
    fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, WktError>,
    ) -> Option<T> {
        let saved = self.pos;
        match parse(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.pos = saved;
                None
            }
        }
    }

    fn point_list<P: PlanarPoint>(&mut self) -> Result<Vec<P>, WktError> {
        self.skip_spaces();
        self.expect_byte(b'(')?;

        let mut points = vec![self.point()?];
        while let Some(point) = self.attempt(|p| {
            p.skip_spaces();
            p.expect_byte(b',')?;
            p.point()
        }) {
            points.push(point);
        }

        self.skip_spaces();
        self.expect_byte(b')')?;
        Ok(points)
    }

    fn pair<P: PlanarPoint>(&mut self) -> Result<(P, P), WktError> {
        self.skip_spaces();
        self.expect_byte(b'(')?;
        let first = self.point()?;
        self.skip_spaces();
        self.expect_byte(b',')?;
        let second = self.point()?;
        self.skip_spaces();
        self.expect_byte(b')')?;
        Ok((first, second))
    }

    fn polygon<P: PlanarPoint>(&mut self) -> Result<Polygon<P>, WktError> {
        self.skip_spaces();
        self.expect_byte(b'(')?;

        let exterior = Ring(self.point_list()?);
        let mut interiors = Vec::new();
        while let Some(inner) = self.attempt(|p| {
            p.skip_spaces();
            p.expect_byte(b',')?;
            p.point_list().map(Ring)
        }) {
            interiors.push(inner);
        }

        self.skip_spaces();
        self.expect_byte(b')')?;
        Ok(Polygon::new(exterior, interiors))
    }

    fn multi_polygon<P: PlanarPoint>(&mut self) -> Result<MultiPolygon<P>, WktError> {
        self.skip_spaces();
        self.expect_byte(b'(')?;

        let mut parts: Vec<Polygon<P>> = Vec::new();
        loop {
            let first = parts.is_empty();
            let part = self.attempt(|p| {
                if !first {
                    p.skip_spaces();
                    p.expect_byte(b',')?;
                }
                p.polygon()
            });
            match part {
                Some(part) => parts.push(part),
                None => break,
            }
        }

        self.skip_spaces();
        self.expect_byte(b')')?;
        Ok(MultiPolygon(parts))
    }
}

impl FromWkt for XyPoint {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("POINT")?;
        parser.skip_spaces();
        parser.expect_byte(b'(')?;
        let point = parser.point()?;
        parser.skip_spaces();
        parser.expect_byte(b')')?;
        Ok(point)
    }
}

impl FromWkt for GeoPoint {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("POINT")?;
        parser.skip_spaces();
        parser.expect_byte(b'(')?;
        let point = parser.point()?;
        parser.skip_spaces();
        parser.expect_byte(b')')?;
        Ok(point)
    }
}

impl<P: PlanarPoint> FromWkt for Segment<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("SEGMENT")?;
        let (first, second) = parser.pair()?;
        Ok(Segment::new(first, second))
    }
}

impl<P: PlanarPoint> FromWkt for Rect<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("BOX")?;
        let (min, max) = parser.pair()?;
        Ok(Rect::new(min, max))
    }
}

impl<P: PlanarPoint> FromWkt for LineString<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("LINESTRING")?;
        Ok(LineString(parser.point_list()?))
    }
}

impl<P: PlanarPoint> FromWkt for Ring<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("LINEARRING")?;
        Ok(Ring(parser.point_list()?))
    }
}

impl<P: PlanarPoint> FromWkt for Polygon<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("POLYGON")?;
        parser.polygon()
    }
}

impl<P: PlanarPoint> FromWkt for MultiPolygon<P> {
    fn from_wkt(wkt: &str) -> Result<Self, WktError> {
        let mut parser = Parser::new(wkt);
        parser.skip_spaces();
        parser.expect_tag("MULTIPOLYGON")?;
        parser.multi_polygon()
    }
}
