pub(super) const LOGIN_MUTATION: &str = r#"
  mutation login($email: String!, $password: String!) {
    login(email: $email, password: $password) {
      token
      profile {
        id
        handle
      }
    }
  }
"#;

pub(super) const READING_STATES_QUERY: &str = r#"
  query myReadingStates {
    myReadingStates {
      id
      status
      bookId
      profileId
      createdAt
      book {
        id
        slug
        title
        subtitle
        cover
        authors {
          id
          name
        }
      }
    }
  }
"#;
