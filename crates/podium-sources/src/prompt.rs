//! Prompt construction for each source type
//!
//! Every prompt asks for a first-person speaker profile so that the field
//! extractor sees the same shape of text regardless of the source.

use podium_domain::{ChannelMetadata, ProviderPrompt, UrlSource};

/// Number of top videos included in a channel prompt
pub const MAX_PROMPT_VIDEOS: usize = 5;

const VIDEO_DESCRIPTION_CHARS: usize = 200;

const DOCUMENT_SYSTEM: &str = "You are a professional writer summarizing a client's introduction \
or resume into a speaker profile. Write from the client's first-person perspective. \
Open the profile with a greeting such as \"Hello!\" and end it with a closing greeting.";

const DOCUMENT_INSTRUCTIONS: &str = "Analyze this content in detail and write my speaker profile. \
Cover the topics I speak about, the benefits I bring to an audience, and my personality. \
Use labeled lines \"Topics:\" and \"Personality:\" for comma-separated lists, \
and separate paragraphs with a blank line. Write in the first person.";

const URL_SYSTEM: &str = "You are a research assistant who builds speaker profiles from \
public web pages. Write from the subject's first-person perspective.";

const URL_FIELDS: &str = "Answer with these labeled lines, then a short first-person profile:\n\
Name:\n\
Personality:\n\
Field of activity:\n\
Specialization:\n\
Experience and qualifications:";

const CHANNEL_SYSTEM: &str = "You are a professional writer creating first-person \
speaking-engagement profiles for video creators, based on their channel.";

const CHANNEL_INSTRUCTIONS: &str = "Create my speaking-engagement profile in the first person. \
Describe the topics I speak about, the value I bring to event audiences, and my personality. \
Use labeled lines \"Topics:\" and \"Personality:\" for comma-separated lists, \
and separate paragraphs with a blank line.";

/// Prompt for document text or a flattened profile record
pub fn document_prompt(text: &str) -> ProviderPrompt {
    let mut user = String::new();
    user.push_str("Content:\n---\n");
    user.push_str(text.trim());
    user.push_str("\n---\n\n");
    user.push_str(DOCUMENT_INSTRUCTIONS);
    ProviderPrompt::new(DOCUMENT_SYSTEM, user)
}

/// Prompt for a URL analyzed from its address alone
pub fn url_prompt(source: UrlSource, url: &str) -> ProviderPrompt {
    let mut user = String::new();
    user.push_str(&format!("Analyze the person behind this {}: {}\n\n", source.label(), url.trim()));
    user.push_str(URL_FIELDS);
    ProviderPrompt::new(URL_SYSTEM, user)
}

/// Prompt for channel statistics and top videos
pub fn channel_prompt(channel: &ChannelMetadata) -> ProviderPrompt {
    let mut user = String::new();
    user.push_str(&format!("Channel: {}\n", channel.title));
    user.push_str(&format!("Description: {}\n", channel.description.trim()));
    user.push_str(&format!("Subscribers: {}\n", channel.subscriber_count));
    user.push_str(&format!("Total views: {}\n", channel.view_count));
    user.push_str(&format!("Videos published: {}\n\n", channel.video_count));

    if !channel.top_videos.is_empty() {
        user.push_str("Most viewed videos:\n");
        for (idx, video) in channel.top_videos.iter().take(MAX_PROMPT_VIDEOS).enumerate() {
            user.push_str(&format!("{}. {} ({} views)\n", idx + 1, video.title, video.view_count));
            let description: String = video
                .description
                .trim()
                .chars()
                .take(VIDEO_DESCRIPTION_CHARS)
                .collect();
            if !description.is_empty() {
                user.push_str(&format!("   {}\n", description));
            }
        }
        user.push('\n');
    }

    user.push_str(CHANNEL_INSTRUCTIONS);
    ProviderPrompt::new(CHANNEL_SYSTEM, user)
}
