//! Prompt assembly — combines the user's text with a style instruction block
//! into the final prompt every backend sends.
//!
//! The instruction-block convention is shared with the settings UI: a block
//! may carry its own `## コンテンツ` section, in which case the placeholder
//! sentence inside it is replaced with the user's text; a block without one
//! gets the standard content + output-format trailer appended. The marker and
//! placeholder bytes are load-bearing — saved user prompts depend on them.

use crate::styles::StyleDefinition;

/// System instruction sent to every backend.
pub const SYSTEM_INSTRUCTION: &str = "あなたはHTMLとCSSの専門家です。与えられたテキストをHTMLに変換し、指定されたスタイルを適用してください。";

/// Heading that marks a user-authored content section in an instruction block.
pub const CONTENT_MARKER: &str = "## コンテンツ";

/// Placeholder sentence replaced with the user's text when the marker is present.
pub const CONTENT_PLACEHOLDER: &str = "プレビュー用テキストがここに入ります。";

/// Shown in place of an empty style instruction.
const NO_STYLE_INSTRUCTIONS: &str = "特別なスタイル指示はありません。";

/// Shown by the debug view when no instruction block is set.
const NO_CUSTOM_PROMPT: &str = "カスタムプロンプトが設定されていません";

/// Output-format requirements appended when the block has no content section.
const OUTPUT_FORMAT: &str = "## 出力形式\n\
    - 完全なHTMLを生成してください (DOCTYPE, html, head, body要素を含む)\n\
    - インラインCSSを使って、上記の設定を適用してください\n\
    - CSSカスタムプロパティ (変数) を使用して、色やフォントなどを一元管理してください\n\
    - モバイルレスポンシブなデザインにしてください\n\
    - 実際にブラウザで動作する有効なHTMLとCSSを生成してください\n\
    - マークアップはセマンティックで、アクセシビリティを考慮してください\n\
    \n\
    HTMLのみを出力してください。説明は不要です。\n";

// ─────────────────────────────────────────────
// Assembly
// ─────────────────────────────────────────────

/// Render a style definition into an instruction block.
///
/// This is the block the UI stores when the user picks a built-in style;
/// free-form user prompts take the same position unrendered.
pub fn build_style_prompt(style: &StyleDefinition) -> String {
    let instructions = if style.prompt.is_empty() {
        NO_STYLE_INSTRUCTIONS
    } else {
        style.prompt
    };
    format!(
        "\n# {}スタイル\n{}\n\n## スタイル指示\n{}",
        style.display_name, style.description, instructions
    )
}

/// Combine the user's text with the instruction block into the prompt that
/// goes on the wire.
///
/// Blocks containing [`CONTENT_MARKER`] are assumed to place the content
/// themselves: the first [`CONTENT_PLACEHOLDER`] occurrence is substituted
/// and the rest of the block passes through untouched. All other blocks get
/// the content section and output-format trailer appended. An empty block
/// yields just the trailer, starting directly at the content section.
pub fn build_final_prompt(text: &str, instruction_block: &str) -> String {
    if instruction_block.contains(CONTENT_MARKER) {
        return instruction_block.replacen(CONTENT_PLACEHOLDER, text, 1);
    }
    if instruction_block.is_empty() {
        return format!("{}\n{}\n\n{}", CONTENT_MARKER, text, OUTPUT_FORMAT);
    }
    format!(
        "\n{}\n\n{}\n{}\n\n{}",
        instruction_block, CONTENT_MARKER, text, OUTPUT_FORMAT
    )
}

/// Human-readable summary of what would be sent, for the prompt debug view.
/// Never goes on the wire.
pub fn build_debug_prompt(style_display_name: &str, instructions: &str) -> String {
    let shown = if instructions.is_empty() {
        NO_CUSTOM_PROMPT
    } else {
        instructions
    };
    format!("スタイル: {}\n\n{}", style_display_name, shown)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
