pub(super) const ANALYSIS_SYSTEM_PROMPT: &str = "\
You are a medical research assistant helping to analyze search queries.
For the given query, provide:
1. Key search terms
2. 3 optimized PubMed search queries (using proper syntax with AND, OR, etc.)
3. Relevant MeSH terms
4. A brief search strategy explanation
Format the response as a JSON object with keys: \
keywords, pubmed_queries, mesh_terms, and search_strategy";

pub(super) const REFINE_SYSTEM_PROMPT: &str = "\
You are a PubMed search expert. Given a base query and user feedback, \
provide an improved PubMed search query that addresses the feedback \
while maintaining proper syntax. \
Reply with the query only.";

pub(super) fn refine_user_prompt(base_query: &str, feedback: &str) -> String {
    format!("Base Query: {base_query}\nFeedback: {feedback}")
}

pub(super) const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful scientific assistant.";

/// Abstracts are cut to this many characters before they are sent.
pub(super) const SUMMARY_CHUNK_CHARS: usize = 3000;

pub(super) fn summary_user_prompt(title: &str, abstract_text: &str) -> String {
    let excerpt: String = abstract_text.chars().take(SUMMARY_CHUNK_CHARS).collect();
    format!(
        "I will give you a medical journal abstract below. Your task:
- Focus on identifying the types of **statistical analysis** discussed
- Summarize **key findings** if present
- List **methodologies** or techniques used
- Write clean, bullet-point summaries.

Title: {title}
Abstract: {excerpt}

Respond in well-organized markdown format."
    )
}
