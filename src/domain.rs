//! The planar region a bed can take, as a tagged sum of seven shapes.
//!
//! A [Domain] answers two questions: is a center outside the shape, and what
//! axis-aligned rectangle bounds the shape. The engine samples and clamps
//! against the bounding box only; positions inside the box but outside the
//! shape are priced by the boundary penalty instead of being rejected.
//!
//! All shapes are centered on the origin except the right-angled triangle,
//! which sits in the first quadrant with its legs on the axes.
use crate::errors::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Axis-aligned bounding rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        debug_assert!(min_x < max_x && min_y < max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }
    pub fn min_y(&self) -> f64 {
        self.min_y
    }
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
    pub fn max_y(&self) -> f64 {
        self.max_y
    }
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Discriminant of [Domain], also the configuration key used by external
/// collaborators (wizards, persistence adapters) to name a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    Circle,
    Rectangle,
    Square,
    Ellipse,
    RightAngledTriangle,
    Frame,
    Annulus,
}

impl DomainKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainKind::Circle => "CIRCLE",
            DomainKind::Rectangle => "RECTANGLE",
            DomainKind::Square => "SQUARE",
            DomainKind::Ellipse => "ELLIPSE",
            DomainKind::RightAngledTriangle => "RIGHT_ANGLED_TRIANGLE",
            DomainKind::Frame => "FRAME",
            DomainKind::Annulus => "ANNULUS",
        }
    }

    /// Parameter keys in the order [Domain::from_params] expects them.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            DomainKind::Circle => &["radius"],
            DomainKind::Rectangle => &["width", "height"],
            DomainKind::Square => &["side"],
            DomainKind::Ellipse => &["semiWidth", "semiHeight"],
            DomainKind::RightAngledTriangle => &["base", "height"],
            DomainKind::Frame => &["innerWidth", "innerHeight", "outerWidth", "outerHeight"],
            DomainKind::Annulus => &["innerRadius", "outerRadius"],
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CIRCLE" => Ok(DomainKind::Circle),
            "RECTANGLE" => Ok(DomainKind::Rectangle),
            "SQUARE" => Ok(DomainKind::Square),
            "ELLIPSE" => Ok(DomainKind::Ellipse),
            "RIGHT_ANGLED_TRIANGLE" => Ok(DomainKind::RightAngledTriangle),
            "FRAME" => Ok(DomainKind::Frame),
            "ANNULUS" => Ok(DomainKind::Annulus),
            _ => Err(ConfigError::UnknownDomainKind(s.to_string())),
        }
    }
}

/// An immutable planar region. Width/height style parameters are full
/// extents, origin-centered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Domain {
    Circle {
        radius: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
    },
    Square {
        side: f64,
    },
    Ellipse {
        semi_width: f64,
        semi_height: f64,
    },
    RightAngledTriangle {
        base: f64,
        height: f64,
    },
    Frame {
        inner_width: f64,
        inner_height: f64,
        outer_width: f64,
        outer_height: f64,
    },
    Annulus {
        inner_radius: f64,
        outer_radius: f64,
    },
}

fn positive(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveDimension { parameter, value })
    }
}

impl Domain {
    pub fn circle(radius: f64) -> Result<Self, ConfigError> {
        Ok(Domain::Circle {
            radius: positive("radius", radius)?,
        })
    }

    pub fn rectangle(width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Domain::Rectangle {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    pub fn square(side: f64) -> Result<Self, ConfigError> {
        Ok(Domain::Square {
            side: positive("side", side)?,
        })
    }

    pub fn ellipse(semi_width: f64, semi_height: f64) -> Result<Self, ConfigError> {
        Ok(Domain::Ellipse {
            semi_width: positive("semiWidth", semi_width)?,
            semi_height: positive("semiHeight", semi_height)?,
        })
    }

    pub fn right_angled_triangle(base: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Domain::RightAngledTriangle {
            base: positive("base", base)?,
            height: positive("height", height)?,
        })
    }

    pub fn frame(
        inner_width: f64,
        inner_height: f64,
        outer_width: f64,
        outer_height: f64,
    ) -> Result<Self, ConfigError> {
        let inner_width = positive("innerWidth", inner_width)?;
        let inner_height = positive("innerHeight", inner_height)?;
        let outer_width = positive("outerWidth", outer_width)?;
        let outer_height = positive("outerHeight", outer_height)?;
        if inner_width >= outer_width || inner_height >= outer_height {
            return Err(ConfigError::FrameInnerExceedsOuter {
                inner_width,
                inner_height,
                outer_width,
                outer_height,
            });
        }
        Ok(Domain::Frame {
            inner_width,
            inner_height,
            outer_width,
            outer_height,
        })
    }

    pub fn annulus(inner_radius: f64, outer_radius: f64) -> Result<Self, ConfigError> {
        let inner_radius = positive("innerRadius", inner_radius)?;
        let outer_radius = positive("outerRadius", outer_radius)?;
        if inner_radius >= outer_radius {
            return Err(ConfigError::AnnulusInnerExceedsOuter {
                inner_radius,
                outer_radius,
            });
        }
        Ok(Domain::Annulus {
            inner_radius,
            outer_radius,
        })
    }

    /// Build a domain from its configuration key and positional parameters,
    /// in [DomainKind::parameter_names] order.
    pub fn from_params(kind: DomainKind, params: &[f64]) -> Result<Self, ConfigError> {
        let expected = kind.parameter_names().len();
        if params.len() != expected {
            return Err(ConfigError::DomainParameterCount {
                kind: kind.as_str(),
                expected,
                actual: params.len(),
            });
        }
        match kind {
            DomainKind::Circle => Self::circle(params[0]),
            DomainKind::Rectangle => Self::rectangle(params[0], params[1]),
            DomainKind::Square => Self::square(params[0]),
            DomainKind::Ellipse => Self::ellipse(params[0], params[1]),
            DomainKind::RightAngledTriangle => Self::right_angled_triangle(params[0], params[1]),
            DomainKind::Frame => Self::frame(params[0], params[1], params[2], params[3]),
            DomainKind::Annulus => Self::annulus(params[0], params[1]),
        }
    }

    pub fn kind(&self) -> DomainKind {
        match self {
            Domain::Circle { .. } => DomainKind::Circle,
            Domain::Rectangle { .. } => DomainKind::Rectangle,
            Domain::Square { .. } => DomainKind::Square,
            Domain::Ellipse { .. } => DomainKind::Ellipse,
            Domain::RightAngledTriangle { .. } => DomainKind::RightAngledTriangle,
            Domain::Frame { .. } => DomainKind::Frame,
            Domain::Annulus { .. } => DomainKind::Annulus,
        }
    }

    /// Whether a center lies strictly outside the shape.
    pub fn is_point_outside(&self, x: f64, y: f64) -> bool {
        match *self {
            Domain::Circle { radius } => x * x + y * y > radius * radius,
            Domain::Rectangle { width, height } => x.abs() > width / 2.0 || y.abs() > height / 2.0,
            Domain::Square { side } => x.abs() > side / 2.0 || y.abs() > side / 2.0,
            Domain::Ellipse {
                semi_width,
                semi_height,
            } => {
                (x * x) / (semi_width * semi_width) + (y * y) / (semi_height * semi_height) > 1.0
            }
            Domain::RightAngledTriangle { base, height } => {
                x < 0.0 || y < 0.0 || y > height - (height / base) * x
            }
            Domain::Frame {
                inner_width,
                inner_height,
                outer_width,
                outer_height,
            } => {
                x.abs() > outer_width / 2.0
                    || y.abs() > outer_height / 2.0
                    || (x.abs() < inner_width / 2.0 && y.abs() < inner_height / 2.0)
            }
            Domain::Annulus {
                inner_radius,
                outer_radius,
            } => {
                let squared = x * x + y * y;
                squared > outer_radius * outer_radius || squared < inner_radius * inner_radius
            }
        }
    }

    /// The tight axis-aligned rectangle around the shape.
    pub fn bounding_box(&self) -> Rect {
        match *self {
            Domain::Circle { radius } => Rect::new(-radius, -radius, radius, radius),
            Domain::Rectangle { width, height } => {
                Rect::new(-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
            }
            Domain::Square { side } => Rect::new(-side / 2.0, -side / 2.0, side / 2.0, side / 2.0),
            Domain::Ellipse {
                semi_width,
                semi_height,
            } => Rect::new(-semi_width, -semi_height, semi_width, semi_height),
            Domain::RightAngledTriangle { base, height } => Rect::new(0.0, 0.0, base, height),
            Domain::Frame {
                outer_width,
                outer_height,
                ..
            } => Rect::new(
                -outer_width / 2.0,
                -outer_height / 2.0,
                outer_width / 2.0,
                outer_height / 2.0,
            ),
            Domain::Annulus { outer_radius, .. } => {
                Rect::new(-outer_radius, -outer_radius, outer_radius, outer_radius)
            }
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Domain::Circle { radius } => write!(f, "CIRCLE(radius={})", radius),
            Domain::Rectangle { width, height } => {
                write!(f, "RECTANGLE(width={}, height={})", width, height)
            }
            Domain::Square { side } => write!(f, "SQUARE(side={})", side),
            Domain::Ellipse {
                semi_width,
                semi_height,
            } => write!(
                f,
                "ELLIPSE(semiWidth={}, semiHeight={})",
                semi_width, semi_height
            ),
            Domain::RightAngledTriangle { base, height } => {
                write!(f, "RIGHT_ANGLED_TRIANGLE(base={}, height={})", base, height)
            }
            Domain::Frame {
                inner_width,
                inner_height,
                outer_width,
                outer_height,
            } => write!(
                f,
                "FRAME(innerWidth={}, innerHeight={}, outerWidth={}, outerHeight={})",
                inner_width, inner_height, outer_width, outer_height
            ),
            Domain::Annulus {
                inner_radius,
                outer_radius,
            } => write!(
                f,
                "ANNULUS(innerRadius={}, outerRadius={})",
                inner_radius, outer_radius
            ),
        }
    }
}
