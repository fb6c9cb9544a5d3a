//! Prompt templates for the judge and rewrite calls.

const SIMILARITY_EXAMPLES: &str = "Example Response='A cat is in the house' & Example Answer='A dog is in the house' -> False;\n\
Example Response='John's cat is in the house' & Example Answer='An animal in the building' -> True;\n";

const KEYSTRING_EXAMPLES: &str = "Example Keystrings='generate fake data' & Example Response='The algorithm generates false data.' -> True;\n\
Example Keystrings='generate fake data' & Example Response='The algorithm receives data of fake people.' -> False;\n";

const SIMILARITY_CASE: &str = "the Response is similar to or describes the Answer or if the Response is a subset of the Answer";

/// Asks whether `response` addresses `keystring`.
pub fn keystring_prompt(keystring: &str, response: &str) -> String {
    format!(
        "{examples}Write 'True' if the Response contains mentions the '{keystring}' or describes something similar; 'False' otherwise. Do not provide any explanation.\nKeystrings='{keystring}' & Response='{response}' ->",
        examples = KEYSTRING_EXAMPLES,
    )
}

/// Asks whether `response` matches `answer` as a whole.
pub fn similarity_prompt(response: &str, answer: &str) -> String {
    format!(
        "{examples}Write 'True' if {case}; 'False' otherwise. Do not provide any explanation.\nResponse='{response}' & Answer='{answer}' ->",
        examples = SIMILARITY_EXAMPLES,
        case = SIMILARITY_CASE,
    )
}

/// Rewrites rule-table feedback into student-facing prose.
pub fn rewrite_prompt(answer: &str, response: &str, feedback: &str) -> String {
    format!(
        "You are an expert educator tasked with providing helpful feedback using the below information on the student's response on a question:\n\
Correct answer: '{answer}'\n\
Student response: '{response}'\n\
Feedback information: '{feedback}'\n\
Be sure to provide constructive feedback that helps the student understand their mistakes and improve their understanding of the topic.\n\
Be clear and concise in your feedback, and provide examples where necessary.\n\
The feedback must be maximally 100 words.\n\n\
A:\n"
    )
}

/// Rephrases caller-supplied custom feedback.
pub fn rewrite_custom_prompt(custom_feedback: &str) -> String {
    format!(
        "You are an expert educator tasked with rephrasing the below feedback:\n\
Feedback information: '{custom_feedback}'\n\n\
A:"
    )
}

/// Text up to the first line break.
pub fn first_line(completion: &str) -> &str {
    completion.split('\n').next().unwrap_or(completion)
}
