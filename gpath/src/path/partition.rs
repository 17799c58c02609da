//! Partitioning a collection of paths by shared ancestry.
//!
//! [`partition`] groups paths under common bases in a single greedy pass.
//! Each path joins the first existing group whose base it shares a common
//! base with, and that group's base shrinks to the shared part. The result
//! is not guaranteed to be the smallest possible set of groups: it depends
//! on input order.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::path::common::CommonOptions;
use crate::path::types::GenericPath;

/// A group under construction: its current base and its members so far.
#[derive(Debug)]
struct Group {
    base: GenericPath,
    members: Vec<GenericPath>,
}

/// Group `paths` by common base.
///
/// Returns a map from each base to the paths below it, expressed relative
/// to the base. Members keep their input order and duplicates are kept.
///
/// With `options.allow_parents` the member lists are left empty and only
/// the bases are reported.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if a member could not be expressed
/// relative to its base. This indicates a bug rather than bad input.
///
/// # Examples
///
/// ```
/// use gpath::GenericPath;
/// use gpath::path::{partition, CommonOptions};
///
/// let paths = ["a/b", "a/c", "../x"].map(GenericPath::from);
/// let groups = partition(paths, CommonOptions::default()).unwrap();
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[&GenericPath::from("a")], vec![GenericPath::from("b"), GenericPath::from("c")]);
/// assert_eq!(groups[&GenericPath::from("../x")], vec![GenericPath::empty()]);
/// ```
pub fn partition<I>(paths: I, options: CommonOptions) -> Result<BTreeMap<GenericPath, Vec<GenericPath>>>
where
    I: IntoIterator<Item = GenericPath>,
{
    let keep_members = !options.allow_parents;
    let mut groups: Vec<Group> = Vec::new();

    for path in paths {
        let matched = groups.iter().enumerate().find_map(|(index, group)| {
            group
                .base
                .common_with(&path, options)
                .map(|common| (index, common))
        });

        match matched {
            Some((index, common)) => {
                let index = rebase(&mut groups, index, common);
                if keep_members {
                    groups[index].members.push(path);
                }
            }
            None => {
                let members = if keep_members {
                    vec![path.clone()]
                } else {
                    Vec::new()
                };
                groups.push(Group {
                    base: path,
                    members,
                });
            }
        }
    }

    let mut result = BTreeMap::new();
    for Group { base, members } in groups {
        let subpaths = members
            .iter()
            .map(|member| {
                member.subpath_from(&base).ok_or_else(|| Error::InvalidState {
                    details: format!("{member} is not below its partition base {base}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        result.insert(base, subpaths);
    }
    Ok(result)
}

/// [`partition`] over anything convertible into a path.
///
/// # Errors
///
/// See [`partition`].
///
/// # Examples
///
/// ```
/// use gpath::GenericPath;
/// use gpath::path::{partition_paths, CommonOptions};
///
/// let groups = partition_paths(["/usr/bin", "/usr/lib", "C:/Windows"], CommonOptions::default()).unwrap();
/// let bases: Vec<String> = groups.keys().map(ToString::to_string).collect();
/// assert_eq!(bases, vec!["/usr", "C:/Windows"]);
/// ```
pub fn partition_paths<I, P>(paths: I, options: CommonOptions) -> Result<BTreeMap<GenericPath, Vec<GenericPath>>>
where
    I: IntoIterator<Item = P>,
    P: Into<GenericPath>,
{
    partition(paths.into_iter().map(Into::into), options)
}

/// Move the group at `index` to `base`, merging it with any other group
/// already there. Returns the position of the resulting group.
fn rebase(groups: &mut Vec<Group>, index: usize, base: GenericPath) -> usize {
    if groups[index].base == base {
        return index;
    }

    let Some(existing) = groups.iter().position(|group| group.base == base) else {
        groups[index].base = base;
        return index;
    };

    // The group created first absorbs the other one
    let (keep, absorb) = if existing < index {
        (existing, index)
    } else {
        (index, existing)
    };
    log::trace!(
        "merging partition {} into {} at base {base}",
        groups[absorb].base,
        groups[keep].base
    );
    let absorbed = groups.remove(absorb);
    groups[keep].members.extend(absorbed.members);
    groups[keep].base = base;
    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> GenericPath {
        GenericPath::from(text)
    }

    fn ps(texts: &[&str]) -> Vec<GenericPath> {
        texts.iter().map(|t| p(t)).collect()
    }

    #[test]
    fn test_empty_input() {
        let groups = partition(Vec::<GenericPath>::new(), CommonOptions::default()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_path() {
        let groups = partition(ps(&["/a/b"]), CommonOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&p("/a/b")], vec![p("")]);
    }

    #[test]
    fn test_basic_grouping() {
        let groups = partition(ps(&["a/b", "a/c", "../x"]), CommonOptions::default()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&p("a")], ps(&["b", "c"]));
        assert_eq!(groups[&p("../x")], vec![p("")]);
    }

    #[test]
    fn test_drives_and_roots_stay_apart() {
        let groups = partition(
            ps(&["/usr/bin", "C:/usr/bin", "usr/bin", "C:usr"]),
            CommonOptions::default(),
        )
        .unwrap();
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_duplicates_preserved() {
        let groups = partition(ps(&["/a/b", "/a/b", "/a/c"]), CommonOptions::default()).unwrap();
        assert_eq!(groups[&p("/a")], ps(&["b", "b", "c"]));
    }

    #[test]
    fn test_strict_options_split_relative_paths() {
        let groups = partition(ps(&["a", "b"]), CommonOptions::STRICT).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&p("a")], vec![p("")]);
        assert_eq!(groups[&p("b")], vec![p("")]);

        let groups = partition(ps(&["a", "b"]), CommonOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&p("")], ps(&["a", "b"]));
    }

    #[test]
    fn test_allow_parents_reports_bases_only() {
        let groups = partition(
            ps(&["", "usr/bin", "home/username", "../usr/bin", "../../usr/bin"]),
            CommonOptions::LENIENT,
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&p("../..")], Vec::<GenericPath>::new());
    }

    #[test]
    fn test_base_shrinks_as_paths_arrive() {
        // "/a/y" moves the base to "/a", then "/c" moves it to "/"
        let groups = partition(ps(&["/a/x", "/a/y", "/c"]), CommonOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&p("/")], ps(&["a/x", "a/y", "c"]));
    }

    #[test]
    fn test_rebase_merges_groups() {
        let mut groups = vec![
            Group {
                base: p("/a"),
                members: ps(&["/a"]),
            },
            Group {
                base: p("/"),
                members: ps(&["/"]),
            },
        ];
        let index = rebase(&mut groups, 0, p("/"));
        assert_eq!(index, 0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].base, p("/"));
        assert_eq!(groups[0].members, ps(&["/a", "/"]));

        let mut groups = vec![
            Group {
                base: p("/"),
                members: ps(&["/"]),
            },
            Group {
                base: p("/a"),
                members: ps(&["/a"]),
            },
        ];
        let index = rebase(&mut groups, 1, p("/"));
        assert_eq!(index, 0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, ps(&["/", "/a"]));
    }

    #[test]
    fn test_partition_paths_accepts_text() {
        let groups = partition_paths(["x/1", "x/2"], CommonOptions::default()).unwrap();
        assert_eq!(groups[&p("x")], ps(&["1", "2"]));
    }

    #[test]
    fn test_greedy_order_dependence() {
        // "a/b/c" and "a/b/d" share "a/b", but "a/x" arrives first and pulls
        // the group down to "a".
        let groups = partition(ps(&["a/b/c", "a/x", "a/b/d"]), CommonOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&p("a")], ps(&["b/c", "x", "b/d"]));
    }
}
