//! The payoff table — the entire game's economics in one function.
//!
//! | First          | Second         | First delta | Second delta |
//! |----------------|----------------|-------------|--------------|
//! | conciliatory   | conciliatory   | +65         | +65          |
//! | confrontational| confrontational| −65         | −65          |
//! | confrontational| conciliatory   | +75         | −25          |
//! | conciliatory   | confrontational| −25         | +75          |
//!
//! Mutual escalation is strictly worse for both than mutual peace, but
//! unilateral escalation strictly beats unilateral peace — the tension that
//! drives the whole population dynamic.  Birds left out of the fighting pool
//! pay [`Outcome::Idle`], a far steeper cost than losing a fight.

/// A signed point change, carried as the enum discriminant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Outcome {
    /// Confronted a conciliatory opponent.
    Win = 75,
    /// Both stayed peaceful.
    Draw = 65,
    /// Stayed peaceful against a confrontational opponent.
    Loss = -25,
    /// Both escalated.
    Escalation = -65,
    /// Sat out the tick entirely.  Not a fight outcome — applied by the
    /// population engine to every bird not selected into a pair.
    Idle = -200,
}

impl Outcome {
    /// The signed point change this outcome applies.
    #[inline]
    pub const fn delta(self) -> i32 {
        self as i32
    }
}

/// Resolve one fight from the two strategy choices (`true` means
/// confrontational).  Exhaustive over `bool × bool`; swapping the inputs
/// swaps the outputs.
pub const fn resolve(first: bool, second: bool) -> (Outcome, Outcome) {
    match (first, second) {
        (false, false) => (Outcome::Draw, Outcome::Draw),
        (true, true) => (Outcome::Escalation, Outcome::Escalation),
        (true, false) => (Outcome::Win, Outcome::Loss),
        (false, true) => (Outcome::Loss, Outcome::Win),
    }
}
