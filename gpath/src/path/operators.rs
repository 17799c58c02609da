//! Structural operators on paths.
//!
//! Every operator returns a new [`GenericPath`]. Binary operators keep the
//! left operand's encoding label, falling back to the right operand's.

use std::ops::{Add, Div, Mul, Shl, Shr, Sub};

use crate::error::{Error, Result};
use crate::path::types::{check_drive, GenericPath};

impl GenericPath {
    /// Append `other` to this path.
    ///
    /// A rooted `other` replaces this path's root and parts. Otherwise each
    /// leading `..` of `other` removes one trailing part, climbing further
    /// up when this path is relative and stopping at the root when it is
    /// not. The drive of `other` wins when it has one.
    ///
    /// Also available as `+` and `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let base = GenericPath::from("/usr/local");
    /// assert_eq!((&base + &GenericPath::from("../bin")).to_string(), "/usr/bin");
    /// assert_eq!((&base + &GenericPath::from("/etc")).to_string(), "/etc");
    /// assert_eq!((&base + &GenericPath::from("D:")).to_string(), "D:/usr/local");
    /// assert_eq!(
    ///     GenericPath::from("a").concat(&GenericPath::from("../../b")).to_string(),
    ///     "../b"
    /// );
    /// ```
    #[must_use]
    pub fn concat(&self, other: &GenericPath) -> GenericPath {
        let drive = if other.drive.is_empty() {
            self.drive.clone()
        } else {
            other.drive.clone()
        };
        let encoding = self.encoding.clone().or_else(|| other.encoding.clone());

        if other.root {
            return GenericPath::from_raw(true, drive, 0, other.parts.clone(), encoding);
        }

        let mut parts = self.parts.clone();
        let popped = other.parent_level.min(parts.len());
        parts.truncate(parts.len() - popped);
        let parent_level = if self.root {
            0
        } else {
            self.parent_level.saturating_add(other.parent_level - popped)
        };
        parts.extend(other.parts.iter().cloned());

        GenericPath::from_raw(self.root, drive, parent_level, parts, encoding)
    }

    /// Concatenate every path in order, starting from the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let joined = GenericPath::join(["/usr", "C:local", "bin"]);
    /// assert_eq!(joined.to_string(), "C:/usr/local/bin");
    /// assert!(GenericPath::join(Vec::<GenericPath>::new()).is_empty());
    /// ```
    pub fn join<I, P>(paths: I) -> GenericPath
    where
        I: IntoIterator<Item = P>,
        P: Into<GenericPath>,
    {
        paths
            .into_iter()
            .fold(GenericPath::empty(), |acc, path| acc.concat(&path.into()))
    }

    /// Remove `n` trailing parts.
    ///
    /// Once the named parts run out, each further step adds a parent level
    /// to a relative path and does nothing to a rooted one. Also available
    /// as `-`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!((GenericPath::from("a/b") - 3).to_string(), "..");
    /// assert_eq!((GenericPath::from("/a/b") - 3).to_string(), "/");
    /// assert_eq!((GenericPath::from("C:") - 1).to_string(), "C:..");
    /// ```
    #[must_use]
    pub fn truncate(&self, n: usize) -> GenericPath {
        let popped = n.min(self.parts.len());
        let parts = self.parts[..self.parts.len() - popped].to_vec();
        let parent_level = if self.root {
            0
        } else {
            self.parent_level.saturating_add(n - popped)
        };
        GenericPath::from_raw(
            self.root,
            self.drive.clone(),
            parent_level,
            parts,
            self.encoding.clone(),
        )
    }

    /// [`truncate`](Self::truncate) with a signed count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `n` is negative.
    pub fn checked_truncate(&self, n: isize) -> Result<GenericPath> {
        let n = usize::try_from(n).map_err(|_| Error::NegativeCount {
            operation: "truncate",
            count: n,
        })?;
        Ok(self.truncate(n))
    }

    /// Repeat the relative parts `n` times.
    ///
    /// Root and drive are kept. `n == 0` leaves only the anchor. Also
    /// available as `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!((GenericPath::from("../a/b") * 2).to_string(), "../../a/b/a/b");
    /// assert_eq!((GenericPath::from("/a") * 0).to_string(), "/");
    /// assert_eq!((GenericPath::from("C:a") * 0).to_string(), "C:");
    /// ```
    #[must_use]
    pub fn repeat(&self, n: usize) -> GenericPath {
        let parts = std::iter::repeat(&self.parts)
            .take(n)
            .flatten()
            .cloned()
            .collect();
        GenericPath::from_raw(
            self.root,
            self.drive.clone(),
            self.parent_level.saturating_mul(n),
            parts,
            self.encoding.clone(),
        )
    }

    /// [`repeat`](Self::repeat) with a signed count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCount`] if `n` is negative.
    pub fn checked_repeat(&self, n: isize) -> Result<GenericPath> {
        let n = usize::try_from(n).map_err(|_| Error::NegativeCount {
            operation: "repeat",
            count: n,
        })?;
        Ok(self.repeat(n))
    }

    /// Remove up to `n` parent levels. Rooted paths are unchanged and a
    /// negative `n` shifts down instead. Also available as `<<`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!((GenericPath::from("../../a") << 1).to_string(), "../a");
    /// assert_eq!((GenericPath::from("../a") << 5).to_string(), "a");
    /// assert_eq!((GenericPath::from("a") << -1).to_string(), "../a");
    /// ```
    #[must_use]
    pub fn shift_up(&self, n: isize) -> GenericPath {
        let steps = n.unsigned_abs();
        let parent_level = if self.root {
            0
        } else if n >= 0 {
            self.parent_level.saturating_sub(steps)
        } else {
            self.parent_level.saturating_add(steps)
        };
        self.with_parent_level(parent_level)
    }

    /// Add `n` parent levels. Rooted paths are unchanged and a negative `n`
    /// shifts up instead. Also available as `>>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!((GenericPath::from("a/b") >> 1).to_string(), "../a/b");
    /// assert_eq!((GenericPath::from("/a/b") >> 1).to_string(), "/a/b");
    /// ```
    #[must_use]
    pub fn shift_down(&self, n: isize) -> GenericPath {
        match n.checked_neg() {
            Some(negated) => self.shift_up(negated),
            // isize::MIN has no positive counterpart
            None => self.shift_up(isize::MAX).shift_up(1),
        }
    }

    /// Drop the root, optionally replacing the parent level.
    ///
    /// With `None` a relative path keeps its own parent level and a rooted
    /// path gets none.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!(GenericPath::from("C:/a/b").as_relative(None).to_string(), "C:a/b");
    /// assert_eq!(GenericPath::from("C:/a/b").as_relative(Some(2)).to_string(), "C:../../a/b");
    /// assert_eq!(GenericPath::from("..").as_relative(Some(0)).to_string(), ".");
    /// ```
    #[must_use]
    pub fn as_relative(&self, parent_level: Option<usize>) -> GenericPath {
        GenericPath::from_raw(
            false,
            self.drive.clone(),
            parent_level.unwrap_or(self.parent_level),
            self.parts.clone(),
            self.encoding.clone(),
        )
    }

    /// Anchor the path at a root, discarding any parent level.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert_eq!(GenericPath::from("../a/b").as_absolute().to_string(), "/a/b");
    /// assert_eq!(GenericPath::from("C:a").as_absolute().to_string(), "C:/a");
    /// ```
    #[must_use]
    pub fn as_absolute(&self) -> GenericPath {
        GenericPath::from_raw(
            true,
            self.drive.clone(),
            0,
            self.parts.clone(),
            self.encoding.clone(),
        )
    }

    /// Replace the drive. An empty string removes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDrive`] if `drive` is longer than one
    /// character.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let path = GenericPath::from("C:/a").with_drive("K").unwrap();
    /// assert_eq!(path.to_string(), "K:/a");
    /// assert!(GenericPath::from("/a").with_drive("KK").is_err());
    /// ```
    pub fn with_drive(&self, drive: &str) -> Result<GenericPath> {
        check_drive(drive)?;
        Ok(GenericPath::from_raw(
            self.root,
            drive.to_string(),
            self.parent_level,
            self.parts.clone(),
            self.encoding.clone(),
        ))
    }

    /// Remove the drive.
    #[must_use]
    pub fn without_drive(&self) -> GenericPath {
        GenericPath::from_raw(
            self.root,
            String::new(),
            self.parent_level,
            self.parts.clone(),
            self.encoding.clone(),
        )
    }

    fn with_parent_level(&self, parent_level: usize) -> GenericPath {
        GenericPath::from_raw(
            self.root,
            self.drive.clone(),
            parent_level,
            self.parts.clone(),
            self.encoding.clone(),
        )
    }
}

impl Add<&GenericPath> for &GenericPath {
    type Output = GenericPath;

    fn add(self, rhs: &GenericPath) -> GenericPath {
        self.concat(rhs)
    }
}

impl Add for GenericPath {
    type Output = GenericPath;

    fn add(self, rhs: GenericPath) -> GenericPath {
        self.concat(&rhs)
    }
}

impl Add<&str> for &GenericPath {
    type Output = GenericPath;

    fn add(self, rhs: &str) -> GenericPath {
        self.concat(&GenericPath::from(rhs))
    }
}

impl Div<&GenericPath> for &GenericPath {
    type Output = GenericPath;

    fn div(self, rhs: &GenericPath) -> GenericPath {
        self.concat(rhs)
    }
}

impl Div for GenericPath {
    type Output = GenericPath;

    fn div(self, rhs: GenericPath) -> GenericPath {
        self.concat(&rhs)
    }
}

impl Div<&str> for &GenericPath {
    type Output = GenericPath;

    fn div(self, rhs: &str) -> GenericPath {
        self.concat(&GenericPath::from(rhs))
    }
}

impl Sub<usize> for &GenericPath {
    type Output = GenericPath;

    fn sub(self, n: usize) -> GenericPath {
        self.truncate(n)
    }
}

impl Sub<usize> for GenericPath {
    type Output = GenericPath;

    fn sub(self, n: usize) -> GenericPath {
        self.truncate(n)
    }
}

impl Mul<usize> for &GenericPath {
    type Output = GenericPath;

    fn mul(self, n: usize) -> GenericPath {
        self.repeat(n)
    }
}

impl Mul<usize> for GenericPath {
    type Output = GenericPath;

    fn mul(self, n: usize) -> GenericPath {
        self.repeat(n)
    }
}

impl Shl<isize> for &GenericPath {
    type Output = GenericPath;

    fn shl(self, n: isize) -> GenericPath {
        self.shift_up(n)
    }
}

impl Shl<isize> for GenericPath {
    type Output = GenericPath;

    fn shl(self, n: isize) -> GenericPath {
        self.shift_up(n)
    }
}

impl Shr<isize> for &GenericPath {
    type Output = GenericPath;

    fn shr(self, n: isize) -> GenericPath {
        self.shift_down(n)
    }
}

impl Shr<isize> for GenericPath {
    type Output = GenericPath;

    fn shr(self, n: isize) -> GenericPath {
        self.shift_down(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> GenericPath {
        GenericPath::from(text)
    }

    #[test]
    fn test_concat_relative() {
        assert_eq!(p("a") + p("b"), p("a/b"));
        assert_eq!(p("a/b") + p("../c"), p("a/c"));
        assert_eq!(p("a") + p(".."), p(""));
        assert_eq!(p("a") + p("../.."), p(".."));
        assert_eq!(p("..") + p("../a"), p("../../a"));
        assert_eq!(p("") + p(""), p(""));
    }

    #[test]
    fn test_concat_rooted_left() {
        assert_eq!(p("/a") + p(".."), p("/"));
        assert_eq!(p("/a") + p("../../../b"), p("/b"));
        assert_eq!(p("/") + p("a"), p("/a"));
    }

    #[test]
    fn test_concat_rooted_right() {
        assert_eq!(p("a/b") + p("/c"), p("/c"));
        assert_eq!(p("../a") + p("/"), p("/"));
        assert_eq!(p("C:/") + p("/"), p("C:/"));
        assert_eq!(p("C:/a") + p("/b"), p("C:/b"));
    }

    #[test]
    fn test_concat_drives() {
        assert_eq!(p("/a") + p("C:"), p("C:/a"));
        assert_eq!(p("C:/a") + p("D:b"), p("D:/a/b"));
        assert_eq!(p("a") + p("C:"), p("C:a"));
        assert_eq!(p("C:a") + p("b"), p("C:a/b"));
    }

    #[test]
    fn test_div_matches_add() {
        let base = p("/usr");
        assert_eq!(&base / &p("bin"), &base + &p("bin"));
        assert_eq!(&base / "bin", p("/usr/bin"));
        assert_eq!(&base + "../etc", p("/etc"));
    }

    #[test]
    fn test_join() {
        assert_eq!(GenericPath::join(["/usr", "C:local", "bin"]), p("C:/usr/local/bin"));
        assert_eq!(GenericPath::join(["a", "..", ".."]), p(".."));
        assert_eq!(GenericPath::join([p("a"), p("b")]), p("a/b"));
        assert_eq!(GenericPath::join([&p("x")]), p("x"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(p("a/b") - 1, p("a"));
        assert_eq!(p("a/b") - 2, p(""));
        assert_eq!(p("a/b") - 3, p(".."));
        assert_eq!(p("../a") - 2, p("../.."));
        assert_eq!(p("/a/b") - 5, p("/"));
        assert_eq!(p("C:") - 1, p("C:.."));
        assert_eq!(p("a") - 0, p("a"));
    }

    #[test]
    fn test_checked_truncate() {
        assert_eq!(p("a/b").checked_truncate(1).unwrap(), p("a"));
        let err = p("a/b").checked_truncate(-1).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeCount { operation: "truncate", count: -1 }
        ));
    }

    #[test]
    fn test_repeat() {
        assert_eq!(p("../a/b") * 2, p("../../a/b/a/b"));
        assert_eq!(p("a") * 3, p("a/a/a"));
        assert_eq!(p("/a") * 2, p("/a/a"));
        assert_eq!(p("../a") * 0, p(""));
        assert_eq!(p("/a") * 0, p("/"));
        assert_eq!(p("C:a") * 0, p("C:"));
        assert_eq!(p("a") * 1, p("a"));
    }

    #[test]
    fn test_checked_repeat() {
        assert_eq!(p("a").checked_repeat(2).unwrap(), p("a/a"));
        assert!(p("a").checked_repeat(-3).unwrap_err().is_negative_count());
    }

    #[test]
    fn test_shift_up() {
        assert_eq!(p("../a/b") << 1, p("a/b"));
        assert_eq!(p("../../a") << 1, p("../a"));
        assert_eq!(p("a") << 3, p("a"));
        assert_eq!(p("/a") << 1, p("/a"));
        assert_eq!(p("a") << -2, p("../../a"));
    }

    #[test]
    fn test_shift_down() {
        assert_eq!(p("a/b") >> 1, p("../a/b"));
        assert_eq!(p("../a") >> 2, p("../../../a"));
        assert_eq!(p("/a/b") >> 1, p("/a/b"));
        assert_eq!(p("C:/a") >> 1, p("C:/a"));
        assert_eq!(p("../../a") >> -1, p("../a"));
    }

    #[test]
    fn test_shift_extremes() {
        assert_eq!(p("a") >> isize::MIN, p("a"));
        assert_eq!(p("../a") << isize::MAX, p("a"));
    }

    #[test]
    fn test_truncate_and_concat_saturate() {
        let deepest = p("a") >> isize::MAX >> isize::MAX >> 2;
        assert_eq!(deepest.parent_level(), usize::MAX);

        assert_eq!((p("../../a") - usize::MAX).parent_level(), usize::MAX);
        assert_eq!((&deepest - 3).parent_level(), usize::MAX);
        assert_eq!((&deepest + "../..").parent_level(), usize::MAX);
        assert_eq!((&(p("..") >> isize::MAX) + &deepest).parent_level(), usize::MAX);
        assert_eq!((p("/a") - usize::MAX), p("/"));
    }

    #[test]
    fn test_as_relative() {
        assert_eq!(p("/").as_relative(Some(2)), p("../.."));
        assert_eq!(p("..").as_relative(Some(0)), p(""));
        assert_eq!(p("..").as_relative(None), p(".."));
        assert_eq!(p("C:/a/b").as_relative(None), p("C:a/b"));
        assert_eq!(p("C:/a/b").as_relative(Some(2)), p("C:../../a/b"));
    }

    #[test]
    fn test_as_absolute() {
        assert_eq!(p("../a/b").as_absolute(), p("/a/b"));
        assert_eq!(p("").as_absolute(), p("/"));
        assert_eq!(p("C:..").as_absolute(), p("C:/"));
    }

    #[test]
    fn test_with_and_without_drive() {
        assert_eq!(p("/a").with_drive("K").unwrap(), p("K:/a"));
        assert_eq!(p("C:/a").with_drive("").unwrap(), p("/a"));
        assert_eq!(p("C:../a").without_drive(), p("../a"));
        assert!(matches!(
            p("a").with_drive("KK").unwrap_err(),
            Error::InvalidDrive { .. }
        ));
    }

    #[test]
    fn test_encoding_propagation() {
        let left = p("a").with_encoding(Some("utf-16-le"));
        let right = p("b").with_encoding(Some("utf-8"));
        let plain = p("c");

        assert_eq!((&left + &right).encoding(), Some("utf-16-le"));
        assert_eq!((&plain + &right).encoding(), Some("utf-8"));
        assert_eq!((&plain + &plain).encoding(), None);
        assert_eq!((&left - 1).encoding(), Some("utf-16-le"));
        assert_eq!((&left * 2).encoding(), Some("utf-16-le"));
        assert_eq!((&left >> 1).encoding(), Some("utf-16-le"));
        assert_eq!(left.as_absolute().encoding(), Some("utf-16-le"));
    }

    #[test]
    fn test_operators_do_not_mutate() {
        let base = p("../a/b");
        let _ = &base + &p("c");
        let _ = &base - 1;
        let _ = &base * 2;
        let _ = &base << 1;
        assert_eq!(base, p("../a/b"));
    }
}
