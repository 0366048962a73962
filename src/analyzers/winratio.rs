use serde::{Deserialize, Serialize};

/// Wins/loses counter used for hero pair and hero matchup records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRatio {
    pub wins: u32,
    pub loses: u32,
}

impl WinRatio {
    pub fn add_score(&mut self, win: bool) {
        if win {
            self.wins += 1;
        } else {
            self.loses += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.loses
    }

    /// wins - loses
    pub fn net(&self) -> i64 {
        self.wins as i64 - self.loses as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winratio_test() {
        let mut wr = WinRatio::default();
        assert_eq!(wr.total(), 0);
        wr.add_score(true);
        wr.add_score(true);
        wr.add_score(false);
        assert_eq!(wr.total(), 3);
        assert_eq!(wr.net(), 1);
        let behind = WinRatio { wins: 1, loses: 4 };
        assert_eq!(behind.net(), -3);
    }
}
