/// Phase of a hand. Cards are dealt between phases.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Round {
    Start,
    PreFlop,
    Flop,
    Turn,
    End,
}

impl Round {
    pub fn next(&self) -> Self {
        match self {
            Round::Start => Round::PreFlop,
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::End,
            Round::End => panic!("no round after the end"),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression() {
        assert!(Round::Start.next() == Round::PreFlop);
        assert!(Round::PreFlop.next() == Round::Flop);
        assert!(Round::Flop.next() == Round::Turn);
        assert!(Round::Turn.next() == Round::End);
    }

    #[test]
    #[should_panic]
    fn nothing_after_end() {
        Round::End.next();
    }
}
