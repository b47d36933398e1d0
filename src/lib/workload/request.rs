use std::fmt;

/// A message of a request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    /// The role of the author.
    pub role: String,
    /// The content.
    pub content: String,
}

/// A request to a model-serving endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// The target model.
    pub model: String,
    /// The messages.
    pub messages: Vec<Message>,
    /// The streaming flag.
    pub stream: bool,
}

impl Request {
    /// Create a request carrying a single user message.
    pub fn new(model: &str, content: &str) -> Request {
        Request {
            model: model.to_string(),
            messages: vec![Message { role: "user".to_string(), content: content.to_string() }],
            stream: true,
        }
    }

    /// Return the content of the first message.
    #[inline]
    pub fn content(&self) -> &str {
        &self.messages[0].content
    }
}

impl fmt::Display for Request {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "request ({} {:?})", self.model, self.content())
    }
}
