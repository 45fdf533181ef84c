use std::fs;
use serde_derive::{Deserialize, Serialize};
use url::Url;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL_NAME: &str = "llama-3.3-70b-versatile";

use crate::slides;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("URL error: {0}")]
	Url(#[from] url::ParseError),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Malformed response: {0}")]
	Malformed(&'static str),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Message {
	pub role: String,
	pub content: Option<String>,
}

impl Message {
	pub fn user(content: String) -> Self {
		Message { role: "user".to_string(), content: Some(content) }
	}
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
	model: String,
	messages: Vec<Message>,
	stream: bool,
}

/// Client for a Groq style OpenAI-compatible chat completions endpoint.
/// Constructed once in main and passed to whoever needs it; there is no
/// process-wide instance.
pub struct ChatClient {
	post_url: Url,
	api_key: String,
	model: String,
	pub write_req_resp: bool,
}

impl ChatClient {
	pub fn new(api_base: &str, api_key: String) -> Result<Self, ApiError> {
		let url_base = format!("{}/chat/completions", api_base.trim_end_matches('/'));
		Ok(ChatClient {
			post_url: Url::parse(&url_base)?,
			api_key,
			model: DEFAULT_MODEL_NAME.to_string(),
			write_req_resp: false,
		})
	}

	pub fn set_model_name(&mut self, model_name: &str) {
		self.model = model_name.to_string();
	}

	/// The instruction sent to the model when asking for slides 2 to
	/// `num_slides`: one block per slide, title line first, up to 8
	/// bullet lines, every block terminated by the sentinel. The bullet
	/// count is advisory only, nothing checks the reply against it.
	pub fn outline_prompt(topic: &str, num_slides: u32) -> String {
		format!(
			"Generate content for slides 2 to {num_slides} of a {num_slides}-slide presentation on '{topic}'. \
			This means you should generate content for exactly {blocks} slides. \
			For each slide, output the slide data in plain text, \
			where the first line is the slide title and 8 subsequent lines are bullet points. \
			After the data for each slide, output a continuous string of 10 dollar symbols (i.e., {sentinel}) \
			as a separator. Do not output any additional text. For example:\n\n\
			Slide Title 2\n\
			Bullet point 1\n\
			Bullet point 2\n\
			{sentinel}\n\
			Slide Title 3\n\
			Bullet point 1\n\
			{sentinel}\n\
			...\n\
			\n\
			Ensure that your output ends with the 10 dollar symbols separator after the last slide.",
			blocks = num_slides - 1,
			sentinel = slides::SENTINEL,
		)
	}

	/// Ask the model for the content of slides 2 to `num_slides` and
	/// return the raw reply text. Callers must only invoke this for
	/// `num_slides >= 2`; a failure here is not fatal to the program,
	/// the caller falls back to a title-only deck.
	pub async fn request_outline(&self, topic: &str, num_slides: u32) -> Result<String, ApiError> {
		let chat = ChatRequest {
			model: self.model.clone(),
			messages: vec![Message::user(Self::outline_prompt(topic, num_slides))],
			stream: false,
		};
		let serialised = serde_json::to_string_pretty(&chat)?;
		if self.write_req_resp {
			fs::write("last_request.json", &serialised)?;
		}
		let client = reqwest::Client::new();
		let req = client
			.post(self.post_url.clone())
			.bearer_auth(&self.api_key)
			.header(CONTENT_TYPE, "application/json")
			.body(serialised)
			.send()
			.await?;
		let body = req.text().await?;
		if self.write_req_resp {
			fs::write("last_response.json", &body)?;
		}
		let message = Self::parse_response(&body)?;
		match message.content {
			Some(content) => Ok(content.trim().to_string()),
			None => Err(ApiError::Malformed("No content in the assistant message")),
		}
	}

	pub fn parse_response(response: &str) -> Result<Message, ApiError> {
		let mut json: serde_json::Value = serde_json::from_str(response)?;
		let message = json
			.get_mut("choices").ok_or(ApiError::Malformed("No choices in the return object"))?
			.get_mut(0).ok_or(ApiError::Malformed("No element 0 in the choices object"))?
			.get_mut("message").ok_or(ApiError::Malformed("No message in the choices element 0"))?
			.take();
		let res: Message = serde_json::from_value(message)?;
		Ok(res)
	}
}
