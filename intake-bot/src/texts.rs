//! User-facing texts and reply keyboard labels.
//!
//! Button labels are matched against incoming text exactly, so they must not change between
//! the keyboard that is shown and the router that reads the press.

/// Confirmation button: submit everything collected in the guided flow.
pub const BTN_SEND: &str = "Confirm submission";
/// Confirmation button: keep writing.
pub const BTN_MORE: &str = "Not finished yet";

/// Commands shown in the Telegram command menu: (name, description).
pub const COMMAND_MENU: &[(&str, &str)] = &[
    ("start", "About this assistant"),
    ("help", "How to submit a request"),
    ("consult", "Book a consultation step by step"),
];

pub const START_TEXT: &str = "Hello! 👋\n\
I am the attorney's assistant.\n\n\
You can:\n\
• Write your question in free form\n\
• Use /consult to prepare a request step by step\n\
• Read the instructions with /help\n\n\
All messages are passed to the attorney confidentially.";

pub fn help_text() -> String {
    format!(
        "ℹ️ <b>Help</b>\n\n\
I will help you prepare a request to the attorney.\n\n\
Recommended order:\n\
1️⃣ Tap /consult\n\
2️⃣ Write one or more messages with:\n\
   • your name\n\
   • how to contact you\n\
   • a description of your situation\n\
   • a convenient time to reach you\n\
3️⃣ When you are done, tap «{send}».\n\
   Tap «{more}» if you want to add something first.\n\n\
Until you tap «{send}», your messages are <b>not</b> sent to the attorney.",
        send = BTN_SEND,
        more = BTN_MORE,
    )
}

pub fn consult_text() -> String {
    format!(
        "📝 <b>Consultation request</b>\n\n\
Please write one or more messages with:\n\
1️⃣ Your name\n\
2️⃣ How to contact you (phone, Telegram or e-mail)\n\
3️⃣ A short description of your situation\n\
4️⃣ A convenient time to reach you\n\n\
When you are done, tap «{send}».\n\
If you want to add more, use «{more}».",
        send = BTN_SEND,
        more = BTN_MORE,
    )
}

pub fn more_text() -> String {
    format!(
        "All right 👍\nWrite everything you consider important.\n\
When you are ready, tap «{send}».",
        send = BTN_SEND
    )
}

pub fn nothing_recorded_text() -> String {
    format!(
        "I do not have any information for the request yet.\n\
Please first write a message describing your situation, then tap «{send}» again.",
        send = BTN_SEND
    )
}

pub const SUBMITTED_TEXT: &str = "Thank you! 🙏\n\
Your request has been sent to the attorney. You will be contacted after it has been reviewed.";

pub const DIRECT_ACK_TEXT: &str = "Thank you! 🙏\n\
Your message has been received and passed to the attorney. You will be contacted after it has been reviewed.";
