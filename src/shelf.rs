//! Display-ready shelf built from reading states
//!
//! [`fetch_shelf`] is the build-time entry point: it never fails, any problem
//! is logged and turned into an empty [`Shelf`].

use serde::{Deserialize, Serialize};

use crate::literal::{Credentials, FetchError, LiteralClient, ReadingState, ReadingStatus, Transport};

/// Title used when a book has none
pub const UNTITLED: &str = "Untitled";

/// Author line used when a book lists no named authors
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Flattened book record handed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBook {
    pub id: String,
    pub title: String,
    /// Author names joined with ", "
    pub author: String,
    pub cover: Option<String>,
    pub slug: Option<String>,
    /// When the reading state was created, as sent by the service
    pub date: Option<String>,
}

impl From<&ReadingState> for DisplayBook {
    fn from(state: &ReadingState) -> Self {
        let book = &state.book;

        let title = book
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        let author = book
            .authors
            .as_ref()
            .map(|authors| {
                authors
                    .iter()
                    .map(|a| a.name.as_deref().unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .filter(|joined| !joined.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        DisplayBook {
            id: book.id.clone(),
            title,
            author,
            cover: book.cover.clone().filter(|c| !c.is_empty()),
            slug: book.slug.clone(),
            date: state.created_at.clone(),
        }
    }
}

/// The three lists a reading page renders, in the service's order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub currently_reading: Vec<DisplayBook>,
    pub want_to_read: Vec<DisplayBook>,
    pub finished: Vec<DisplayBook>,
}

impl Shelf {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_states(states: &[ReadingState]) -> Self {
        let mut shelf = Self::empty();
        for state in states {
            let list = match state.status {
                ReadingStatus::IsReading => &mut shelf.currently_reading,
                ReadingStatus::WantsToRead => &mut shelf.want_to_read,
                ReadingStatus::Finished => &mut shelf.finished,
                ReadingStatus::Other => continue,
            };
            list.push(DisplayBook::from(state));
        }
        shelf
    }

    pub fn len(&self) -> usize {
        self.currently_reading.len() + self.want_to_read.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} reading, {} want, {} finished",
            self.currently_reading.len(),
            self.want_to_read.len(),
            self.finished.len()
        )
    }
}

/// Log in, pull reading states and partition them
pub fn try_fetch_shelf<T: Transport>(
    credentials: Option<&Credentials>,
    client: &LiteralClient<T>,
) -> Result<Shelf, FetchError> {
    let credentials = credentials.ok_or(FetchError::MissingCredentials)?;
    let session = client.login(credentials)?;
    let states = client.reading_states(&session)?;
    Ok(Shelf::from_states(&states))
}

/// Build-time fetch: always returns a shelf, empty on any failure
pub fn fetch_shelf<T: Transport>(
    credentials: Option<&Credentials>,
    client: &LiteralClient<T>,
    quiet: bool,
) -> Shelf {
    if credentials.is_none() {
        if !quiet {
            eprintln!("No Literal credentials. Using empty data.");
        }
        return Shelf::empty();
    }

    if !quiet {
        eprintln!("Fetching from Literal...");
    }
    match try_fetch_shelf(credentials, client) {
        Ok(shelf) => {
            if !quiet {
                eprintln!("Found: {}", shelf.summary());
            }
            shelf
        }
        Err(e) => {
            if !quiet {
                eprintln!("Literal error: {e}");
            }
            Shelf::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::test_support::{FakeTransport, LOGIN_OK};

    fn state(json: &str) -> ReadingState {
        serde_json::from_str(json).unwrap()
    }

    const STATES_OK: &str = r#"{"data": {"myReadingStates": [
        {"id": "s1", "status": "FINISHED", "bookId": "b1", "profileId": "p1", "createdAt": "2024-01-02T10:00:00.000Z",
         "book": {"id": "b1", "slug": "dune", "title": "Dune", "subtitle": null, "cover": "https://img/dune.jpg",
                  "authors": [{"id": "a1", "name": "Frank Herbert"}]}},
        {"id": "s2", "status": "IS_READING", "bookId": "b2", "profileId": "p1", "createdAt": "2024-02-01T10:00:00.000Z",
         "book": {"id": "b2", "slug": "piranesi", "title": "Piranesi", "subtitle": null, "cover": null,
                  "authors": [{"id": "a2", "name": "Susanna Clarke"}]}},
        {"id": "s3", "status": "WANTS_TO_READ", "bookId": "b3", "profileId": "p1", "createdAt": "2024-03-01T10:00:00.000Z",
         "book": {"id": "b3", "slug": "good-omens", "title": "Good Omens", "subtitle": null, "cover": "",
                  "authors": [{"id": "a3", "name": "Terry Pratchett"}, {"id": "a4", "name": "Neil Gaiman"}]}},
        {"id": "s4", "status": "FINISHED", "bookId": "b4", "profileId": "p1", "createdAt": "2024-04-01T10:00:00.000Z",
         "book": {"id": "b4", "slug": "anathem", "title": "Anathem", "subtitle": null, "cover": null, "authors": []}},
        {"id": "s5", "status": "DROPPED", "bookId": "b5", "profileId": "p1", "createdAt": "2024-05-01T10:00:00.000Z",
         "book": {"id": "b5", "slug": "x", "title": "X", "subtitle": null, "cover": null, "authors": []}}
    ]}}"#;

    fn creds() -> Credentials {
        Credentials::new("reader@example.com", "pw")
    }

    #[test]
    fn display_book_applies_defaults() {
        let s = state(
            r#"{"id": "s", "status": "FINISHED", "createdAt": "2024-01-01",
                "book": {"id": "b", "slug": "s", "title": null, "cover": "", "authors": null}}"#,
        );
        let book = DisplayBook::from(&s);
        assert_eq!(book.title, "Untitled");
        assert_eq!(book.author, "Unknown");
        assert_eq!(book.cover, None);
        assert_eq!(book.date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn display_book_treats_empty_title_and_authors_as_missing() {
        let s = state(
            r#"{"id": "s", "status": "FINISHED",
                "book": {"id": "b", "title": "", "authors": []}}"#,
        );
        let book = DisplayBook::from(&s);
        assert_eq!(book.title, UNTITLED);
        assert_eq!(book.author, UNKNOWN_AUTHOR);
        assert!(book.date.is_none());
    }

    #[test]
    fn display_book_joins_author_names() {
        let s = state(
            r#"{"id": "s", "status": "IS_READING",
                "book": {"id": "b", "title": "Good Omens",
                         "authors": [{"name": "Terry Pratchett"}, {"name": "Neil Gaiman"}]}}"#,
        );
        assert_eq!(DisplayBook::from(&s).author, "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn shelf_partitions_by_status_in_order() {
        let fake = FakeTransport::with_json(&[STATES_OK]);
        let client = LiteralClient::new(&fake);
        let session = crate::literal::Session {
            token: "t".to_string(),
            profile_id: "p1".to_string(),
            handle: None,
        };
        let shelf = Shelf::from_states(&client.reading_states(&session).unwrap());

        let ids = |list: &[DisplayBook]| list.iter().map(|b| b.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&shelf.currently_reading), vec!["b2"]);
        assert_eq!(ids(&shelf.want_to_read), vec!["b3"]);
        assert_eq!(ids(&shelf.finished), vec!["b1", "b4"]);
        assert_eq!(shelf.len(), 4);
        assert_eq!(shelf.summary(), "1 reading, 1 want, 2 finished");
    }

    #[test]
    fn shelf_serializes_with_template_keys() {
        let json = serde_json::to_value(Shelf::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"currentlyReading": [], "wantToRead": [], "finished": []})
        );
    }

    #[test]
    fn display_book_serializes_null_cover() {
        let book = DisplayBook {
            id: "b".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            cover: None,
            slug: Some("t".to_string()),
            date: Some("2024-01-01".to_string()),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json["cover"].is_null());
        assert_eq!(json["author"], "A");
        assert_eq!(json["slug"], "t");
    }

    #[test]
    fn missing_credentials_make_no_calls() {
        let fake = FakeTransport::default();
        let client = LiteralClient::new(&fake);
        let shelf = fetch_shelf(None, &client, true);
        assert_eq!(shelf, Shelf::empty());
        assert_eq!(fake.call_count(), 0);
    }

    #[test]
    fn try_fetch_reports_missing_credentials() {
        let fake = FakeTransport::default();
        let client = LiteralClient::new(&fake);
        assert!(matches!(
            try_fetch_shelf(None, &client),
            Err(FetchError::MissingCredentials)
        ));
    }

    #[test]
    fn fetch_runs_login_then_states_with_token() {
        let fake = FakeTransport::with_json(&[LOGIN_OK, STATES_OK]);
        let client = LiteralClient::new(&fake);
        let shelf = fetch_shelf(Some(&creds()), &client, true);

        assert_eq!(shelf.len(), 4);
        let calls = fake.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].0.contains("mutation login"));
        assert!(calls[0].2.is_none());
        assert!(calls[1].0.contains("myReadingStates"));
        assert_eq!(calls[1].2.as_deref(), Some("tok-123"));
    }

    #[test]
    fn login_error_yields_empty_shelf_without_second_call() {
        let fake = FakeTransport::with_json(&[
            r#"{"data": null, "errors": [{"message": "Invalid email or password"}]}"#,
            STATES_OK,
        ]);
        let client = LiteralClient::new(&fake);
        let shelf = fetch_shelf(Some(&creds()), &client, true);
        assert_eq!(shelf, Shelf::empty());
        assert_eq!(fake.call_count(), 1);
    }

    #[test]
    fn states_error_yields_empty_shelf() {
        let fake = FakeTransport::with_json(&[
            LOGIN_OK,
            r#"{"errors": [{"message": "Not authorized"}]}"#,
        ]);
        let client = LiteralClient::new(&fake);
        let shelf = fetch_shelf(Some(&creds()), &client, true);
        assert!(shelf.is_empty());
        assert_eq!(fake.call_count(), 2);
    }

    #[test]
    fn transport_failure_yields_empty_shelf() {
        let fake = FakeTransport::default();
        fake.push(Err(FetchError::Transport("connection refused".to_string())));
        let client = LiteralClient::new(&fake);
        assert!(fetch_shelf(Some(&creds()), &client, true).is_empty());
    }

    #[test]
    fn missing_login_result_yields_empty_shelf() {
        let fake = FakeTransport::with_json(&[r#"{"data": {"login": null}}"#]);
        let client = LiteralClient::new(&fake);
        assert!(fetch_shelf(Some(&creds()), &client, true).is_empty());
        assert_eq!(fake.call_count(), 1);
    }
}
