use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser};
use recipe_client::logging::init_logging;
use recipe_client::recipe_edit::RecipeEditor;
use recipe_client::session::FileStorage;
use recipe_client::store::{Action, AuthAction, Credentials, RecipesAction};
use recipe_client::{App, ClientConfig, FirebaseClient, Recipe};

#[derive(Parser, Debug)]
struct Cli {
    /// File that keeps the signed-in session between runs.
    #[clap(long)]
    session_file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RecipeFields {
    #[clap(long)]
    name: Option<String>,
    #[clap(long)]
    description: Option<String>,
    #[clap(long)]
    image_path: Option<String>,
    /// Ingredient as `name=amount`; replaces the existing list when given.
    #[clap(long = "ingredient")]
    ingredients: Vec<String>,
}

#[derive(Parser, Debug)]
enum Command {
    Signup {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    Logout,
    Whoami,
    Recipes,
    AddRecipe {
        #[clap(flatten)]
        fields: RecipeFields,
    },
    EditRecipe {
        index: usize,
        #[clap(flatten)]
        fields: RecipeFields,
    },
    DeleteRecipe {
        index: usize,
    },
    ShoppingList {
        /// Recipe whose ingredients are added to the list.
        index: Option<usize>,
    },
}

type CliApp = App<FirebaseClient, FirebaseClient, FileStorage>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(path) = args.session_file {
        config.session_file = path;
    }

    let client = FirebaseClient::connect(config.clone())?;
    let mut app: CliApp = App::new(
        client.clone(),
        client,
        FileStorage::new(&config.session_file),
    );

    match args.command {
        Command::Signup { email, password } => {
            authenticate(&mut app, AuthAction::SignupStart(Credentials::new(email, password)))
                .await?;
            println!("Successfully signed up!");
        }
        Command::Login { email, password } => {
            authenticate(&mut app, AuthAction::LoginStart(Credentials::new(email, password)))
                .await?;
            println!("Successfully logged in!");
        }
        Command::Logout => {
            app.dispatch(AuthAction::Logout);
            app.run_until_idle().await;
            println!("Logged out.");
        }
        Command::Whoami => {
            restore_session(&mut app).await;
            match &app.state().auth.user {
                Some(user) => println!(
                    "{} ({}), session valid until {}",
                    user.email,
                    user.id,
                    user.token_expiration_date()
                ),
                None => println!("Not logged in."),
            }
        }
        Command::Recipes => {
            restore_session(&mut app).await;
            let recipes = fetch_recipes(&mut app).await?;
            println!("Recipes ({})", recipes.len());
            for (index, recipe) in recipes.iter().enumerate() {
                println!("- [{index}] {recipe}");
                for ingredient in &recipe.ingredients {
                    println!("    {ingredient}");
                }
            }
        }
        Command::AddRecipe { fields } => {
            restore_session(&mut app).await;
            let recipes = fetch_recipes(&mut app).await?;
            let mut editor = RecipeEditor::new(None, &recipes);
            fill_form(&mut editor, fields)?;
            app.dispatch(editor.submit()?);
            save_recipes(&mut app).await;
            println!("Recipe added!");
        }
        Command::EditRecipe { index, fields } => {
            restore_session(&mut app).await;
            let recipes = fetch_recipes(&mut app).await?;
            if index >= recipes.len() {
                bail!("no recipe at index {index}");
            }
            let mut editor = RecipeEditor::new(Some(index), &recipes);
            fill_form(&mut editor, fields)?;
            app.dispatch(editor.submit()?);
            save_recipes(&mut app).await;
            println!("Recipe updated!");
        }
        Command::DeleteRecipe { index } => {
            restore_session(&mut app).await;
            let recipes = fetch_recipes(&mut app).await?;
            if index >= recipes.len() {
                bail!("no recipe at index {index}");
            }
            app.dispatch(RecipesAction::DeleteRecipe(index));
            save_recipes(&mut app).await;
            println!("Recipe deleted!");
        }
        Command::ShoppingList { index } => {
            if let Some(index) = index {
                restore_session(&mut app).await;
                fetch_recipes(&mut app).await?;
                let service = &app.state().recipes;
                let recipe = service
                    .recipe(index)
                    .with_context(|| format!("no recipe at index {index}"))?;
                let action = service.add_ingredients_to_shopping_list(recipe.ingredients.clone());
                app.dispatch(action);
                app.run_until_idle().await;
            }
            println!("Shopping list");
            for ingredient in &app.state().shopping_list.ingredients {
                println!("- {ingredient}");
            }
        }
    }

    Ok(())
}

async fn authenticate(app: &mut CliApp, action: AuthAction) -> anyhow::Result<()> {
    app.dispatch(action);
    app.run_until_idle().await;
    if let Some(message) = &app.state().auth.auth_error {
        bail!("{message}");
    }
    Ok(())
}

async fn restore_session(app: &mut CliApp) {
    app.dispatch(Action::Auth(AuthAction::AutoLogin));
    app.run_until_idle().await;
}

/// Remote collection, or an error when it could not be loaded. Commands that
/// store recipes must stop here, since a store replaces the whole collection.
async fn fetch_recipes(app: &mut CliApp) -> anyhow::Result<Vec<Recipe>> {
    match app.resolve_recipes().await {
        Some(recipes) => Ok(recipes),
        None => bail!("could not fetch recipes, nothing was changed"),
    }
}

async fn save_recipes(app: &mut CliApp) {
    app.dispatch(RecipesAction::StoreRecipes);
    app.run_until_idle().await;
}

fn fill_form(editor: &mut RecipeEditor, fields: RecipeFields) -> anyhow::Result<()> {
    let form = editor.form_mut();
    if let Some(name) = fields.name {
        form.name.set_value(name);
    }
    if let Some(description) = fields.description {
        form.description.set_value(description);
    }
    if let Some(image_path) = fields.image_path {
        form.image_path.set_value(image_path);
    }

    if fields.ingredients.is_empty() {
        return Ok(());
    }
    while editor.ingredient_count() > 0 {
        editor.delete_ingredient(0);
    }
    for raw in fields.ingredients {
        let (name, amount) = raw
            .split_once('=')
            .with_context(|| format!("ingredient `{raw}` must look like name=amount"))?;
        editor.add_ingredient();
        let group = editor
            .form_mut()
            .ingredients
            .last_mut()
            .context("ingredient group was not added")?;
        group.name.set_value(name.trim());
        group.amount.set_value(amount.trim());
    }
    Ok(())
}
