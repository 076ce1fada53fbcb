#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;

// Removing one artifact can splice its neighbours into another, so removal
// repeats until none are left.
const ELLIPSIS_ARTIFACTS: [&str; 3] = ["â€¦", "…", "..."];

const STRIPPED_SUFFIXES: [char; 3] = ['.', ',', '!'];

pub struct Normalizer {}

impl Normalizer {
    /// Turns raw model output into a single question ending in "?". Total over
    /// any input: empty text becomes "?".
    pub fn question(text: &str) -> String {
        let mut res = text.trim().to_string();

        while ELLIPSIS_ARTIFACTS
            .iter()
            .any(|artifact| return res.contains(artifact))
        {
            for artifact in ELLIPSIS_ARTIFACTS {
                res = res.replace(artifact, "");
            }
        }
        res = res.trim().to_string();

        if res.ends_with(STRIPPED_SUFFIXES) {
            res.pop();
        }

        if !res.ends_with('?') {
            res.push('?');
        }

        return res;
    }
}
