use std::collections::BTreeMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// `{{token}}` replacement values for known text files.
///
/// This is plain string replacement: unknown placeholders stay verbatim and
/// replaced values are never rescanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.values.get(key) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after_open[end + CLOSE.len()..];
                }
                None => {
                    // Emit the braces and keep scanning after them so a nested
                    // `{{{{year}}` still finds the inner placeholder.
                    out.push_str(OPEN);
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme_values() -> Substitutions {
        Substitutions::new()
            .set("year", "2024")
            .set("packageManager", "bun")
            .set("packageManagerRun", "bun run")
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = readme_values().apply("# AoC {{year}}\nSolutions for {{year}}.");
        assert_eq!(out, "# AoC 2024\nSolutions for 2024.");
    }

    #[test]
    fn keys_sharing_a_prefix_do_not_collide() {
        let out = readme_values().apply("{{packageManagerRun}} task / {{packageManager}} i");
        assert_eq!(out, "bun run task / bun i");
    }

    #[test]
    fn unknown_placeholders_are_left_verbatim() {
        let out = readme_values().apply("{{name}} in {{year}} {{ year }}");
        assert_eq!(out, "{{name}} in 2024 {{ year }}");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        assert_eq!(readme_values().apply("tail {{year"), "tail {{year");
    }

    #[test]
    fn values_are_not_rescanned() {
        let subs = Substitutions::new().set("a", "{{b}}").set("b", "nope");
        assert_eq!(subs.apply("{{a}}"), "{{b}}");
    }

    #[test]
    fn nested_braces_find_inner_placeholder() {
        assert_eq!(readme_values().apply("{{{{year}}}}"), "{{2024}}");
    }

    #[test]
    fn collects_from_pairs() {
        let subs: Substitutions = [("lang", "TypeScript and Node")].into_iter().collect();
        assert_eq!(subs.get("lang"), Some("TypeScript and Node"));
        assert_eq!(subs.apply("{{lang}}"), "TypeScript and Node");
    }
}
