//! Collection wrapper types for languages and news.
//!
//! Both wrappers borrow a slice from the record and keep its order.

use std::fmt;

use crate::models::{Language, NewsItem};

/// Languages joined as `English (English), Spanish (Español)`.
///
/// An empty slice formats as an empty string.
///
/// # Examples
///
/// ```rust
/// use atlas_core::{display::Languages, models::Language};
///
/// let languages = vec![
///     Language::new("English", "English"),
///     Language::new("Spanish", "Español"),
/// ];
/// assert_eq!(
///     Languages(&languages).to_string(),
///     "English (English), Spanish (Español)"
/// );
/// ```
pub struct Languages<'a>(pub &'a [Language]);

impl<'a> fmt::Display for Languages<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, language) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", language.name, language.native_name)?;
        }
        Ok(())
    }
}

/// Numbered news list, one headline per line.
///
/// The block opens with a newline and every entry is newline-terminated:
///
/// ```text
///
/// 1) "Title". Description
/// 2) "Title without description".
/// ```
///
/// [`Table`](crate::display::Table) strips that surrounding whitespace, so in
/// the report the first headline shares the row label's line.
pub struct NewsBlock<'a>(pub &'a [NewsItem]);

impl<'a> fmt::Display for NewsBlock<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, item) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}) \"{}\". {}",
                i + 1,
                item.title,
                item.description.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_display() {
        let languages = vec![
            Language::new("English", "English"),
            Language::new("Spanish", "Español"),
        ];
        assert_eq!(
            Languages(&languages).to_string(),
            "English (English), Spanish (Español)"
        );
    }

    #[test]
    fn test_languages_empty() {
        assert_eq!(Languages(&[]).to_string(), "");
    }

    #[test]
    fn test_news_block() {
        let news = vec![NewsItem::new("A", Some("B")), NewsItem::new("C", None)];
        assert_eq!(NewsBlock(&news).to_string(), "\n1) \"A\". B\n2) \"C\". \n");
    }

    #[test]
    fn test_news_block_empty() {
        assert_eq!(NewsBlock(&[]).to_string(), "\n");
    }
}
