use crate::parsers::VersionFile;
use regex::Regex;
use semver::Version;

/// `version = "X.Y.Z"` anywhere in a README, typically inside a usage snippet.
pub struct ReadmeParser;

impl VersionFile for ReadmeParser {
    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"version = "([0-9]+)\.([0-9]+)\.([0-9]+)""#)?)
    }

    fn version_line_format(version: &Version) -> String {
        format!(r#"version = "{version}""#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_regex_matches_simple() {
        let regex = ReadmeParser::version_match_regex().unwrap();
        let captures = regex.captures(r#"version = "1.2.3""#).unwrap();
        assert_eq!(&captures[1], "1");
        assert_eq!(&captures[2], "2");
        assert_eq!(&captures[3], "3");
    }

    #[test]
    fn test_version_regex_matches_indented_snippet() {
        let regex = ReadmeParser::version_match_regex().unwrap();
        let content = r#"```hcl
terraform {
  required_providers {
    onelogin = {
      source  = "onelogin/onelogin"
      version = "0.4.10"
    }
  }
}
```"#;
        let captures = regex.captures(content).unwrap();
        assert_eq!(&captures[0], r#"version = "0.4.10""#);
    }

    #[test]
    fn test_version_regex_requires_exact_spacing() {
        let regex = ReadmeParser::version_match_regex().unwrap();
        assert!(!regex.is_match(r#"version="1.2.3""#));
        assert!(!regex.is_match(r#"version = '1.2.3'"#));
        assert!(!regex.is_match(r#"version = "~> 1.2""#));
    }

    #[test]
    fn test_version_line_format() {
        let version = Version::new(2, 0, 0);
        assert_eq!(ReadmeParser::version_line_format(&version), r#"version = "2.0.0""#);
    }
}
