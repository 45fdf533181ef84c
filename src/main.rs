use clap::Parser;
use std::env;

mod groqapi;
mod helpers;
mod pptx;
mod slides;

#[cfg(test)]
mod test;

#[derive(Parser)]
struct Cli {
	/// Presentation topic (prompted for interactively when omitted)
	#[clap(long)]
	topic: Option<String>,
	/// Name shown on the title slide
	#[clap(long)]
	name: Option<String>,
	/// Roll number shown on the title slide
	#[clap(long)]
	roll: Option<String>,
	/// Total slide count including the title slide, must be >= 1
	#[clap(long)]
	slides: Option<u32>,
	#[clap(long)]
	/// model name override (GROQ_MODEL_NAME also works)
	model: Option<String>,
	#[clap(long, default_value = "false")]
	/// write last_request.json / last_response.json next to the deck
	write_req_resp: bool,
	#[clap(long, default_value = "false")]
	/// build the deck without performing an API call
	no_network: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Cli::parse();

	let topic = match args.topic.as_deref() {
		Some(topic) => topic.to_string(),
		None => helpers::prompt_line("Enter the presentation topic: ")?,
	};
	let student_name = match args.name.as_deref() {
		Some(name) => name.to_string(),
		None => helpers::prompt_line("Enter the name: ")?,
	};
	let roll_number = match args.roll.as_deref() {
		Some(roll) => roll.to_string(),
		None => helpers::prompt_line("Enter the roll number: ")?,
	};
	let num_slides = match args.slides {
		Some(n) if n >= 1 => n,
		_ => helpers::prompt_slide_count("Enter the total number of slides (must be an integer >= 1): ")?,
	};

	let mut deck = pptx::Deck::new();
	deck.add_title_slide(
		&format!("Presentation on {}", topic),
		&format!("{}   {}", student_name, roll_number),
	);
	println!("Slide 1 generated: Title Slide");

	if content_slides_requested(num_slides) && !args.no_network {
		match request_content(&args, &topic, num_slides).await {
			Ok(raw_text) => {
				println!("Raw AI response:");
				println!("{}", raw_text);
				let records = slides::parse(&raw_text);
				if records.is_empty() {
					println!("No slide content could be parsed. Only the title slide will be generated.");
				}
				for (i, record) in records.iter().enumerate() {
					let number = i + 2;
					let title = if record.title.is_empty() {
						format!("Slide {}", number)
					} else {
						record.title.clone()
					};
					deck.add_content_slide(&title, &record.bullets);
					println!("Slide {} generated: {}", number, title);
				}
			}
			Err(err) => {
				eprintln!("Error calling or parsing the Groq API response: {}", err);
				println!("Failed to retrieve AI content. Only the title slide will be generated.");
			}
		}
	} else {
		println!("Only the title slide will be generated.");
	}

	let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
	let presentation_filename = helpers::output_filename(&topic, &timestamp);
	deck.save(&presentation_filename)?;
	println!("Presentation saved as '{}'.", presentation_filename);
	Ok(())
}

/// Content slides only exist for decks of two or more slides; a
/// one-slide deck never touches the network.
fn content_slides_requested(num_slides: u32) -> bool {
	num_slides >= 2
}

/// Resolve endpoint configuration from the environment, build the client
/// and fetch the raw outline text. Every failure path out of here is
/// recoverable, the caller downgrades to a title-only deck.
async fn request_content(args: &Cli, topic: &str, num_slides: u32) -> Result<String, Box<dyn std::error::Error>> {
	let groq_api_key = env::var("GROQ_API_KEY");
	let groq_api_base = env::var("GROQ_API_BASE");
	let groq_model_name = env::var("GROQ_MODEL_NAME");

	let api_key = match groq_api_key {
		Ok(key) => key,
		Err(_) => {
			return Err(Into::<Box<dyn std::error::Error>>::into(std::io::Error::new(
				std::io::ErrorKind::Other,
				"GROQ_API_KEY is not set",
			)));
		}
	};
	let api_base = groq_api_base.unwrap_or_else(|_| groqapi::DEFAULT_API_BASE.to_string());

	let mut client = groqapi::ChatClient::new(&api_base, api_key)?;
	if let Some(model_name) = args.model.as_deref() {
		client.set_model_name(model_name);
	} else if let Ok(model_name) = groq_model_name {
		client.set_model_name(&model_name);
	}
	client.write_req_resp = args.write_req_resp;

	Ok(client.request_outline(topic, num_slides).await?)
}
