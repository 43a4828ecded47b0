// Bulk profile-parse prompt. The model maps pasted free text onto the same
// ProfileRecord JSON shape the API accepts, so one deserialization path
// serves both entry points.

pub const PROFILE_PARSE_SYSTEM: &str = "\
You are a precise professional-profile data extractor. \
Parse pasted resume or profile text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Never invent facts: if a field is not present in the text, use null or an empty list.";

pub const PROFILE_PARSE_PROMPT: &str = r#"Parse the following professional profile text into a structured JSON object.

INPUT TEXT:
{raw_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "string",
  "headline": "string",
  "location": "string" | null,
  "about": "string" | null,            // the full self-description paragraph, verbatim
  "photo_url": null,
  "contact": {
    "email": "string" | null,
    "phone": "string" | null,
    "website": "string" | null,
    "linkedin": "string" | null
  } | null,
  "experience": [
    {
      "title": "string",
      "company": "string",
      "duration": "string",            // display text as written, e.g. "Jan 2019 – Present"
      "location": "string" | null,
      "description": "string" | null   // the role's full description, verbatim
    }
  ],
  "education": [
    {"institution": "string", "degree": "string" | null, "duration": "string" | null}
  ],
  "skills": ["string"],
  "certifications": [{"name": "string", "issuer": "string" | null}] | null,
  "interests": "string" | null
}

Keep about and description text verbatim, including bullet characters — downstream
heuristics depend on the original punctuation."#;
