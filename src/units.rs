use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A distance in millimetres. All layout is performed in millimetres on an
/// A4 page (210 × 297), measured downward from the top-left corner.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, Display, From,
    Into,
)]
pub struct Mm(pub f32);

/// A distance in typographic points (1/72 inch). Font sizes and the final
/// PDF coordinate space use points.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, Display, From,
    Into,
)]
pub struct Pt(pub f32);

impl Mm {
    pub fn to_pt(self) -> Pt {
        Pt(self.0 * 72.0 / 25.4)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        mm.to_pt()
    }
}

impl std::ops::Mul<f32> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f32) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Mm {
    type Output = Mm;

    fn div(self, rhs: f32) -> Mm {
        Mm(self.0 / rhs)
    }
}
