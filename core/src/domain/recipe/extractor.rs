//! Recovers a structured recipe from free-form assistant text.
//!
//! Recognised shapes live in [`RECIPE_PATTERNS`], tried in order. The first
//! pattern whose title and ingredients rules both match, and whose ingredient
//! list is non-empty, wins. This is a shape heuristic: text that merely looks
//! like a recipe is accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::recipe::entities::ExtractedRecipe;

/// Source form of one recognised recipe layout.
#[derive(Debug, Clone, Copy)]
pub struct RecipePatternDef {
    pub name: &'static str,
    pub title: &'static str,
    pub ingredients: &'static str,
    pub instructions: &'static str,
}

const PLAIN_INGREDIENTS: &str = r"(?is)Ingredients:\s*(.*?)(?:Instructions:|Steps:|$)";
const PLAIN_INSTRUCTIONS: &str = r"(?is)(?:Instructions|Steps):\s*(.*?)(?:Tips:|$)";

/// Priority order matters.
pub const RECIPE_PATTERNS: &[RecipePatternDef] = &[
    RecipePatternDef {
        name: "markdown_labels",
        title: r"(?i)\*\*Recipe Name\*\*:\s*([^\n]+)",
        ingredients: r"(?is)\*\*Ingredients\*\*:\s*(.*?)(?:\*\*Instructions\*\*|\*\*Tips\*\*|$)",
        instructions: r"(?is)\*\*Instructions\*\*:\s*(.*?)(?:\*\*Tips\*\*|$)",
    },
    RecipePatternDef {
        name: "plain_labels",
        title: r"(?i)Recipe:\s*([^\n]+)",
        ingredients: PLAIN_INGREDIENTS,
        instructions: PLAIN_INSTRUCTIONS,
    },
    RecipePatternDef {
        name: "titled_recipe",
        title: r"(?i)^([^:\n]+?)\s*Recipe",
        ingredients: PLAIN_INGREDIENTS,
        instructions: PLAIN_INSTRUCTIONS,
    },
];

#[derive(Debug)]
pub struct RecipePattern {
    pub name: &'static str,
    title: Regex,
    ingredients: Regex,
    instructions: Regex,
}

impl RecipePattern {
    fn compile(def: &RecipePatternDef) -> Result<Self, regex::Error> {
        Ok(Self {
            name: def.name,
            title: Regex::new(def.title)?,
            ingredients: Regex::new(def.ingredients)?,
            instructions: Regex::new(def.instructions)?,
        })
    }

    /// Applies this pattern alone.
    pub fn extract(&self, text: &str) -> Option<ExtractedRecipe> {
        let title = capture(&self.title, text)?.trim().to_string();
        let ingredients = split_items(capture(&self.ingredients, text)?);
        if ingredients.is_empty() {
            return None;
        }

        let raw_instructions = capture(&self.instructions, text).unwrap_or_default().trim();
        let steps = split_items(raw_instructions);
        let instructions = if steps.is_empty() {
            raw_instructions.to_string()
        } else {
            steps.join("\n")
        };

        Some(ExtractedRecipe {
            title,
            ingredients,
            instructions,
        })
    }
}

static COMPILED_PATTERNS: LazyLock<Vec<RecipePattern>> = LazyLock::new(|| {
    RECIPE_PATTERNS
        .iter()
        .filter_map(|def| match RecipePattern::compile(def) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::error!("recipe pattern {} does not compile: {}", def.name, e);
                None
            }
        })
        .collect()
});

pub fn compiled_patterns() -> &'static [RecipePattern] {
    &COMPILED_PATTERNS
}

/// Returns the recipe found by the first matching pattern, if any.
pub fn extract_recipe(text: &str) -> Option<ExtractedRecipe> {
    compiled_patterns()
        .iter()
        .find_map(|pattern| pattern.extract(text))
}

fn capture<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn split_items(block: &str) -> Vec<String> {
    block
        .split(['•', '-', '*'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static RecipePattern {
        compiled_patterns()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(compiled_patterns().len(), RECIPE_PATTERNS.len());
    }

    #[test]
    fn test_markdown_toast() {
        let text = "**Recipe Name**: Toast\n**Ingredients**: - Bread\n- Butter\n**Instructions**: Toast it";

        let recipe = extract_recipe(text).unwrap();

        assert_eq!(
            recipe,
            ExtractedRecipe {
                title: "Toast".to_string(),
                ingredients: vec!["Bread".to_string(), "Butter".to_string()],
                instructions: "Toast it".to_string(),
            }
        );
    }

    #[test]
    fn test_markdown_stops_at_tips() {
        let text = "**Recipe Name**: Banana Pancakes\n\
                    **Ingredients**:\n• 1 banana\n• 2 eggs\n\
                    **Instructions**:\n- Mash the banana\n- Mix with eggs\n- Cook small rounds\n\
                    **Tips**: Serve with yogurt";

        let recipe = extract_recipe(text).unwrap();

        assert_eq!(recipe.title, "Banana Pancakes");
        assert_eq!(recipe.ingredients, vec!["1 banana", "2 eggs"]);
        assert_eq!(
            recipe.instructions,
            "Mash the banana\nMix with eggs\nCook small rounds"
        );
    }

    #[test]
    fn test_markdown_wins_over_looser_patterns() {
        let text = "Recipe: Plain Title\n\
                    Ingredients: - Beans\n\
                    **Recipe Name**: Fancy Title\n\
                    **Ingredients**: - Rice\n\
                    **Instructions**: Cook";

        assert!(pattern("plain_labels").extract(text).is_some());

        let recipe = extract_recipe(text).unwrap();

        assert_eq!(recipe.title, "Fancy Title");
        assert_eq!(recipe.ingredients, vec!["Rice"]);
    }

    #[test]
    fn test_plain_labels_with_steps() {
        let text = "Recipe: Veggie Quesadilla\nIngredients: * tortilla * cheese * spinach\nSteps: Fill, fold and grill.\nTips: cut into triangles";

        let recipe = pattern("plain_labels").extract(text).unwrap();

        assert_eq!(recipe.title, "Veggie Quesadilla");
        assert_eq!(recipe.ingredients, vec!["tortilla", "cheese", "spinach"]);
        assert_eq!(recipe.instructions, "Fill, fold and grill.");
    }

    #[test]
    fn test_titled_recipe_at_start_of_text() {
        let text = "Sweet Potato Fries Recipe\nIngredients:\n- 2 sweet potatoes\n- olive oil\nInstructions:\n- Slice\n- Bake";

        assert!(pattern("markdown_labels").extract(text).is_none());
        assert!(pattern("plain_labels").extract(text).is_none());

        let recipe = extract_recipe(text).unwrap();
        assert_eq!(recipe.title, "Sweet Potato Fries");
        assert_eq!(recipe.ingredients, vec!["2 sweet potatoes", "olive oil"]);
        assert_eq!(recipe.instructions, "Slice\nBake");
    }

    #[test]
    fn test_missing_instructions_are_empty() {
        let text = "**Recipe Name**: Apple Slices\n**Ingredients**: - apple";

        let recipe = extract_recipe(text).unwrap();

        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn test_empty_ingredients_is_no_match() {
        let text = "**Recipe Name**: Nothing\n**Ingredients**: - - \n**Instructions**: wait";

        assert!(extract_recipe(text).is_none());
    }

    #[test]
    fn test_text_without_headers_is_no_match() {
        assert!(extract_recipe("Try offering new foods next to familiar ones.").is_none());
        assert!(extract_recipe("").is_none());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "**Recipe Name**: Toast\n**Ingredients**: - Bread\n- Butter\n**Instructions**: Toast it";

        assert_eq!(extract_recipe(text), extract_recipe(text));
    }
}
