//! Editable field group for creating or changing a recipe.

use thiserror::Error;

use crate::models::{Ingredient, Recipe};
use crate::store::{Action, RecipesAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    /// Whole number without a leading zero.
    PositiveInteger,
}

impl Validator {
    fn accepts(self, value: &str) -> bool {
        match self {
            Validator::Required => !value.trim().is_empty(),
            Validator::PositiveInteger => {
                value.starts_with(|c: char| ('1'..='9').contains(&c))
                    && value.chars().all(|c| c.is_ascii_digit())
                    && value.parse::<u32>().is_ok()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    value: String,
    validators: Vec<Validator>,
}

impl FormControl {
    pub fn new(value: impl Into<String>, validators: Vec<Validator>) -> Self {
        Self {
            value: value.into(),
            validators,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|v| v.accepts(&self.value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientGroup {
    pub name: FormControl,
    pub amount: FormControl,
}

impl IngredientGroup {
    fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: FormControl::new(name, vec![Validator::Required]),
            amount: FormControl::new(
                amount,
                vec![Validator::Required, Validator::PositiveInteger],
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub name: FormControl,
    pub image_path: FormControl,
    pub description: FormControl,
    pub ingredients: Vec<IngredientGroup>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("invalid fields: {}", .0.join(", "))]
    Invalid(Vec<String>),
    #[error("no recipe at index {0}")]
    RecipeNotFound(usize),
}

impl RecipeForm {
    fn blank() -> Self {
        Self::from_values("", "", "", Vec::new())
    }

    fn from_values(
        name: &str,
        image_path: &str,
        description: &str,
        ingredients: Vec<IngredientGroup>,
    ) -> Self {
        Self {
            name: FormControl::new(name, vec![Validator::Required]),
            image_path: FormControl::new(image_path, vec![Validator::Required]),
            description: FormControl::new(description, vec![Validator::Required]),
            ingredients,
        }
    }

    fn invalid_fields(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        for (label, control) in [
            ("name", &self.name),
            ("imagePath", &self.image_path),
            ("description", &self.description),
        ] {
            if !control.is_valid() {
                invalid.push(label.to_string());
            }
        }
        for (i, group) in self.ingredients.iter().enumerate() {
            if !group.name.is_valid() {
                invalid.push(format!("ingredients[{i}].name"));
            }
            if !group.amount.is_valid() {
                invalid.push(format!("ingredients[{i}].amount"));
            }
        }
        invalid
    }

    /// Recipe built from the current values.
    pub fn value(&self) -> Result<Recipe, FormError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(FormError::Invalid(invalid));
        }

        let ingredients = self
            .ingredients
            .iter()
            .enumerate()
            .map(|(i, group)| {
                group
                    .amount
                    .value()
                    .parse::<u32>()
                    .map(|amount| Ingredient::new(group.name.value(), amount))
                    .map_err(|_| FormError::Invalid(vec![format!("ingredients[{i}].amount")]))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe::new(
            self.name.value(),
            self.description.value(),
            self.image_path.value(),
            ingredients,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeEditor {
    id: Option<usize>,
    target_found: bool,
    form: RecipeForm,
}

impl RecipeEditor {
    /// Editing an existing recipe when `id` is set, creating one otherwise.
    pub fn new(id: Option<usize>, recipes: &[Recipe]) -> Self {
        let target = id.and_then(|index| recipes.get(index));
        let form = match target {
            Some(recipe) => RecipeForm::from_values(
                &recipe.name,
                &recipe.image_path,
                &recipe.description,
                recipe
                    .ingredients
                    .iter()
                    .map(|ingredient| {
                        IngredientGroup::new(ingredient.name.as_str(), ingredient.amount.to_string())
                    })
                    .collect(),
            ),
            None => RecipeForm::blank(),
        };
        Self {
            id,
            target_found: target.is_some(),
            form,
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    pub fn ingredient_count(&self) -> usize {
        self.form.ingredients.len()
    }

    pub fn add_ingredient(&mut self) {
        self.form.ingredients.push(IngredientGroup::new("", ""));
    }

    pub fn delete_ingredient(&mut self, index: usize) {
        if index < self.form.ingredients.len() {
            self.form.ingredients.remove(index);
        }
    }

    /// Action that applies the form to the recipe collection.
    pub fn submit(&self) -> Result<Action, FormError> {
        if let Some(index) = self.id.filter(|_| !self.target_found) {
            return Err(FormError::RecipeNotFound(index));
        }
        let recipe = self.form.value()?;
        let action = match self.id {
            Some(index) => RecipesAction::UpdateRecipe { index, recipe },
            None => RecipesAction::AddRecipe(recipe),
        };
        Ok(action.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes() -> Vec<Recipe> {
        vec![Recipe::new(
            "Pancakes",
            "Fluffy",
            "pancakes.png",
            vec![Ingredient::new("Flour", 200), Ingredient::new("Eggs", 2)],
        )]
    }

    #[test]
    fn new_recipe_starts_blank() {
        let editor = RecipeEditor::new(None, &recipes());
        assert!(!editor.edit_mode());
        assert_eq!(editor.form().name.value(), "");
        assert_eq!(editor.ingredient_count(), 0);
    }

    #[test]
    fn edit_mode_prefills_from_recipe() {
        let editor = RecipeEditor::new(Some(0), &recipes());
        assert!(editor.edit_mode());
        assert_eq!(editor.form().name.value(), "Pancakes");
        assert_eq!(editor.form().image_path.value(), "pancakes.png");
        assert_eq!(editor.ingredient_count(), 2);
        assert_eq!(editor.form().ingredients[1].amount.value(), "2");
    }

    #[test]
    fn unknown_edit_id_gives_blank_form() {
        let editor = RecipeEditor::new(Some(9), &recipes());
        assert!(editor.edit_mode());
        assert_eq!(editor.ingredient_count(), 0);
    }

    #[test]
    fn submit_for_unknown_edit_id_is_rejected() {
        let mut editor = RecipeEditor::new(Some(9), &recipes());
        let form = editor.form_mut();
        form.name.set_value("Soup");
        form.image_path.set_value("soup.png");
        form.description.set_value("Warm");

        assert_eq!(editor.submit(), Err(FormError::RecipeNotFound(9)));
    }

    #[test]
    fn adding_and_removing_changes_count_by_one() {
        let mut editor = RecipeEditor::new(Some(0), &recipes());

        editor.add_ingredient();
        assert_eq!(editor.ingredient_count(), 3);

        editor.delete_ingredient(0);
        assert_eq!(editor.ingredient_count(), 2);
        assert_eq!(editor.form().ingredients[0].name.value(), "Eggs");

        editor.delete_ingredient(10);
        assert_eq!(editor.ingredient_count(), 2);
    }

    #[test]
    fn amount_must_be_positive_integer() {
        let cases = [
            ("1", true),
            ("25", true),
            ("100", true),
            ("0", false),
            ("05", false),
            ("-3", false),
            ("2.5", false),
            ("", false),
        ];
        for (raw, ok) in cases {
            let control =
                FormControl::new(raw, vec![Validator::Required, Validator::PositiveInteger]);
            assert_eq!(control.is_valid(), ok, "amount {raw:?}");
        }
    }

    #[test]
    fn submit_rejects_invalid_form() {
        let mut editor = RecipeEditor::new(None, &[]);
        editor.form_mut().name.set_value("Soup");
        editor.add_ingredient();

        let err = editor.submit().unwrap_err();
        assert_eq!(
            err,
            FormError::Invalid(vec![
                "imagePath".into(),
                "description".into(),
                "ingredients[0].name".into(),
                "ingredients[0].amount".into(),
            ])
        );
    }

    #[test]
    fn submit_new_recipe_adds_it() {
        let mut editor = RecipeEditor::new(None, &[]);
        let form = editor.form_mut();
        form.name.set_value("Soup");
        form.image_path.set_value("soup.png");
        form.description.set_value("Warm");
        editor.add_ingredient();
        editor.form_mut().ingredients[0].name.set_value("Water");
        editor.form_mut().ingredients[0].amount.set_value("3");

        assert_eq!(
            editor.submit().unwrap(),
            Action::Recipes(RecipesAction::AddRecipe(Recipe::new(
                "Soup",
                "Warm",
                "soup.png",
                vec![Ingredient::new("Water", 3)]
            )))
        );
    }

    #[test]
    fn submit_in_edit_mode_updates_recipe() {
        let mut editor = RecipeEditor::new(Some(0), &recipes());
        editor.form_mut().description.set_value("Extra fluffy");

        match editor.submit().unwrap() {
            Action::Recipes(RecipesAction::UpdateRecipe { index, recipe }) => {
                assert_eq!(index, 0);
                assert_eq!(recipe.description, "Extra fluffy");
                assert_eq!(recipe.ingredients.len(), 2);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}
