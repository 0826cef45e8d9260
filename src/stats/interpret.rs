use std::fmt;

use super::moments::Moments;

/// |skewness| above this is a skewed distribution.
pub const SKEW_THRESHOLD: f64 = 0.5;
/// |excess kurtosis| above this is a heavy- or light-tailed distribution.
pub const KURTOSIS_THRESHOLD: f64 = 1.0;

// ---------------------------------------------------------------------------
// Shape classifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewShape {
    Right,
    Left,
    Symmetric,
}

impl SkewShape {
    pub fn classify(skewness: f64) -> Self {
        if skewness > SKEW_THRESHOLD {
            SkewShape::Right
        } else if skewness < -SKEW_THRESHOLD {
            SkewShape::Left
        } else {
            SkewShape::Symmetric
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            SkewShape::Right => "right-skewed",
            SkewShape::Left => "left-skewed",
            SkewShape::Symmetric => "approximately symmetric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailShape {
    Leptokurtic,
    Platykurtic,
    Mesokurtic,
}

impl TailShape {
    pub fn classify(excess_kurtosis: f64) -> Self {
        if excess_kurtosis > KURTOSIS_THRESHOLD {
            TailShape::Leptokurtic
        } else if excess_kurtosis < -KURTOSIS_THRESHOLD {
            TailShape::Platykurtic
        } else {
            TailShape::Mesokurtic
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            TailShape::Leptokurtic => "leptokurtic (heavy tails)",
            TailShape::Platykurtic => "platykurtic (light tails)",
            TailShape::Mesokurtic => "mesokurtic (normal tails)",
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The moments of one column together with their shape classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub column: String,
    pub moments: Moments,
    pub skew: SkewShape,
    pub tails: TailShape,
}

impl Report {
    pub fn new(moments: Moments, column: &str) -> Self {
        Report {
            column: column.to_string(),
            moments,
            skew: SkewShape::classify(moments.skewness),
            tails: TailShape::classify(moments.excess_kurtosis),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.moments;
        writeln!(f, "For the attribute '{}':", self.column)?;
        writeln!(f, "Mean = {:.2}", m.mean)?;
        writeln!(f, "Standard Deviation = {:.2}", m.stddev)?;
        writeln!(f, "Skewness = {:.2}", m.skewness)?;
        writeln!(f, "Excess Kurtosis = {:.2}", m.excess_kurtosis)?;
        write!(
            f,
            "The data is {} and {}.",
            self.skew.phrase(),
            self.tails.phrase()
        )
    }
}

/// Classify the moments and render the text report for `column_name`.
pub fn interpret_and_report(moments: Moments, column_name: &str) -> String {
    Report::new(moments, column_name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moments(skewness: f64, excess_kurtosis: f64) -> Moments {
        Moments {
            mean: 0.0,
            stddev: 1.0,
            skewness,
            excess_kurtosis,
        }
    }

    #[test]
    fn test_skew_boundaries_are_strict() {
        assert_eq!(SkewShape::classify(0.5), SkewShape::Symmetric);
        assert_eq!(SkewShape::classify(0.5000001), SkewShape::Right);
        assert_eq!(SkewShape::classify(-0.5), SkewShape::Symmetric);
        assert_eq!(SkewShape::classify(-0.5000001), SkewShape::Left);
        assert_eq!(SkewShape::classify(0.0), SkewShape::Symmetric);
    }

    #[test]
    fn test_kurtosis_boundaries_are_strict() {
        assert_eq!(TailShape::classify(1.0), TailShape::Mesokurtic);
        assert_eq!(TailShape::classify(1.0000001), TailShape::Leptokurtic);
        assert_eq!(TailShape::classify(-1.0), TailShape::Mesokurtic);
        assert_eq!(TailShape::classify(-1.0000001), TailShape::Platykurtic);
    }

    #[test]
    fn test_report_text() {
        let m = Moments {
            mean: 5.0,
            stddev: 2.1380899352993952,
            skewness: 0.65625,
            excess_kurtosis: -0.21875,
        };
        let report = interpret_and_report(m, "Calories_Burned");
        let expected = "For the attribute 'Calories_Burned':\n\
                        Mean = 5.00\n\
                        Standard Deviation = 2.14\n\
                        Skewness = 0.66\n\
                        Excess Kurtosis = -0.22\n\
                        The data is right-skewed and mesokurtic (normal tails).";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_combines_both_phrases() {
        let report = Report::new(moments(-2.0, 4.0), "Age");
        assert_eq!(report.skew, SkewShape::Left);
        assert_eq!(report.tails, TailShape::Leptokurtic);
        assert!(report
            .to_string()
            .ends_with("The data is left-skewed and leptokurtic (heavy tails)."));

        let report = interpret_and_report(moments(0.1, -1.3), "Age");
        assert!(report.ends_with("approximately symmetric and platykurtic (light tails)."));
    }
}
