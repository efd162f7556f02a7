use serde::{Deserialize, Serialize};

/// Optional-value pipeline used to thread fallible extraction steps.
///
/// `Absent` is the only "no value" channel: extractors that can fail return
/// `Maybe`, and emptiness is normalized at the producer (see [`Maybe::from_text`]),
/// so a `Present` never wraps an empty marker. Panics are not caught anywhere
/// in the chain — a panic inside a combinator closure is a defect in the
/// extractor, not an absence.
///
/// Serialized as `{"kind":"some","value":…}` / `{"kind":"none"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Maybe<T> {
    #[serde(rename = "some")]
    Present(T),
    #[serde(rename = "none")]
    Absent,
}

use Maybe::{Absent, Present};

impl<T> Maybe<T> {
    pub fn present(value: T) -> Self {
        Present(value)
    }

    pub fn absent() -> Self {
        Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    /// Transform a present value. `f` must be a total function: steps that
    /// can come up empty return `Maybe` themselves and go through
    /// [`Maybe::and_then`] instead.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Present(v) => Present(f(v)),
            Absent => Absent,
        }
    }

    /// Flattening bind; short-circuits on `Absent`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Present(v) => f(v),
            Absent => Absent,
        }
    }

    /// Lazy fallback: `f` runs only when the value is absent. Laziness is
    /// load-bearing — fallback extraction may be expensive or may log.
    pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
        match self {
            Present(v) => Present(v),
            Absent => f(),
        }
    }

    pub fn get_or(self, default: T) -> T {
        match self {
            Present(v) => v,
            Absent => default,
        }
    }

    pub fn get_or_with(self, f: impl FnOnce() -> T) -> T {
        match self {
            Present(v) => v,
            Absent => f(),
        }
    }

    /// Record-building step: evaluate `extract` against the current draft and,
    /// when it succeeds, store the unwrapped result into the draft. An absent
    /// extraction discards the draft and propagates `Absent`, so no partially
    /// assigned draft is ever observable downstream.
    pub fn assign<U>(
        self,
        extract: impl FnOnce(&T) -> Maybe<U>,
        store: impl FnOnce(&mut T, U),
    ) -> Maybe<T> {
        match self {
            Present(mut draft) => match extract(&draft) {
                Present(value) => {
                    store(&mut draft, value);
                    Present(draft)
                }
                Absent => Absent,
            },
            Absent => Absent,
        }
    }

    /// Run a side effect on a present value; the container is returned unchanged.
    pub fn effect(self, f: impl FnOnce(&T)) -> Maybe<T> {
        if let Present(v) = &self {
            f(v);
        }
        self
    }

    /// Run a side effect only when absent; the container is returned unchanged.
    pub fn on_absent(self, f: impl FnOnce()) -> Maybe<T> {
        if let Absent = &self {
            f();
        }
        self
    }

    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Present(v),
            None => Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Present(v) => Some(v),
            Absent => None,
        }
    }
}

impl Maybe<String> {
    /// Normalize captured text: strip carriage returns, trim, and map an
    /// empty result to `Absent`. Producers of text fields go through here so
    /// `Present("")` cannot exist.
    pub fn from_text(text: impl Into<String>) -> Maybe<String> {
        let cleaned = text.into().replace('\r', "");
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            Absent
        } else {
            Present(trimmed.to_string())
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        Maybe::from_option(opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_and_then_short_circuit() {
        let n: Maybe<u32> = Absent;
        assert_eq!(n.map(|v| v + 1), Absent);
        assert_eq!(Present(2).and_then(|v| Present(v * 3)), Present(6));
        assert_eq!(Present(2).and_then(|_| Maybe::<u32>::Absent), Absent);
    }

    #[test]
    fn or_else_is_lazy() {
        let mut called = false;
        let v = Present(1).or_else(|| {
            called = true;
            Present(2)
        });
        assert_eq!(v, Present(1));
        assert!(!called);

        let v = Maybe::<u32>::Absent.or_else(|| Present(2));
        assert_eq!(v, Present(2));
    }

    #[test]
    fn get_or_variants() {
        assert_eq!(Present(5).get_or(9), 5);
        assert_eq!(Maybe::Absent.get_or(9), 9);
        assert_eq!(Maybe::Absent.get_or_with(|| 7), 7);
    }

    #[test]
    fn assign_threads_a_draft() {
        #[derive(Debug, Default, PartialEq)]
        struct Draft {
            a: u32,
            b: String,
        }

        let built = Maybe::present(Draft::default())
            .assign(|_| Present(4), |d, v| d.a = v)
            .assign(|d| Present(format!("a={}", d.a)), |d, v| d.b = v);
        assert_eq!(
            built,
            Present(Draft {
                a: 4,
                b: "a=4".to_string()
            })
        );
    }

    #[test]
    fn assign_short_circuits_and_skips_later_steps() {
        let mut later_ran = false;
        let built = Maybe::present(0u32)
            .assign(|_| Maybe::<u32>::Absent, |d, v| *d = v)
            .assign(
                |_| {
                    later_ran = true;
                    Present(1)
                },
                |d, v| *d = v,
            );
        assert_eq!(built, Absent);
        assert!(!later_ran);
    }

    #[test]
    fn effects_fire_on_the_right_variant() {
        let mut present_seen = false;
        let mut absent_seen = false;
        Present(1).effect(|_| present_seen = true).on_absent(|| absent_seen = true);
        assert!(present_seen);
        assert!(!absent_seen);

        Maybe::<u32>::Absent
            .effect(|_| present_seen = false)
            .on_absent(|| absent_seen = true);
        assert!(absent_seen);
    }

    #[test]
    fn from_text_normalizes_emptiness() {
        assert_eq!(Maybe::from_text("  water \r\n"), Present("water".to_string()));
        assert_eq!(Maybe::from_text("   "), Absent);
        assert_eq!(Maybe::from_text("\r\n"), Absent);
        assert_eq!(Maybe::from_text(""), Absent);
    }

    #[test]
    fn serde_representation() {
        let present = serde_json::to_value(Present("スイ".to_string())).unwrap();
        assert_eq!(present, serde_json::json!({"kind": "some", "value": "スイ"}));
        let absent = serde_json::to_value(Maybe::<String>::Absent).unwrap();
        assert_eq!(absent, serde_json::json!({"kind": "none"}));

        let back: Maybe<String> = serde_json::from_value(present).unwrap();
        assert_eq!(back, Present("スイ".to_string()));
    }
}
