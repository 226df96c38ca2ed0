/// A happiness meter bounded to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Happiness(u8);

impl Happiness {
    pub const MAX: u8 = 100;

    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn raise(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    pub fn lower(self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }

    pub fn is_full(self) -> bool {
        self.0 == Self::MAX
    }

    pub fn mood(self) -> &'static str {
        match self.0 {
            0 => "Grumpy",
            1..=29 => "Sulking",
            30..=69 => "Content",
            70..=99 => "Purring",
            _ => "Ecstatic",
        }
    }
}

impl Default for Happiness {
    fn default() -> Self {
        Self(50)
    }
}
