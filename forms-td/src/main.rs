mod form;

use clap::Parser;
use form::{Gender, SignupForm};
use recipe_client::logging::init_logging;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(long, default_value = "")]
    username: String,
    #[clap(long, default_value = "")]
    email: String,
    #[clap(long, default_value = form::DEFAULT_SECRET_QUESTION)]
    secret: String,
    #[clap(long, default_value = "")]
    answer: String,
    #[clap(long, value_enum, default_value = "male")]
    gender: Gender,
    /// Replace the username with a suggested one.
    #[clap(long)]
    suggest_username: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let mut signup_form = SignupForm::default();
    signup_form.user_data.username = args.username;
    signup_form.user_data.email = args.email;
    signup_form.secret = args.secret;
    signup_form.question_answer = args.answer;
    signup_form.gender = args.gender;
    if args.suggest_username {
        signup_form.suggest_user_name();
    }

    let submitted = signup_form.submit()?;
    println!("{}", serde_json::to_string_pretty(&submitted)?);
    Ok(())
}
