//! Human-readable HTML report.

use lastbible_core::RomImage;
use lastbible_data::{
    Creature, Database, Effect, EffectFlags, Item, ItemFlags, SpellContext, StringPage, Text,
    TextToken, render_sprite,
};

use crate::ReportError;
use crate::png::data_uri;

/// Render the report with the current local time as its timestamp.
pub fn write_database(rom: &mut RomImage, db: &Database) -> Result<String, ReportError> {
    let generated_on = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    write_database_at(rom, db, &generated_on)
}

/// Render the report. Sprites are read from `rom` and embedded inline.
pub fn write_database_at(
    rom: &mut RomImage,
    db: &Database,
    generated_on: &str,
) -> Result<String, ReportError> {
    let revision = db.revision;
    let lang = revision.language().tag();
    let title = revision.display_name();

    let mut s = String::new();
    s.push_str("<!doctype html>\n");
    s.push_str(&format!("<html lang={lang}>\n"));
    s.push_str("<meta charset=utf-8>\n");
    s.push_str(&format!(
        "<title>Last Bible Database :: ROM: {}</title>\n",
        escape_html(title)
    ));
    s.push_str("<style>img { image-rendering: pixelated; image-rendering: crisp-edges; }</style>\n\n");

    s.push_str("<h2>ROM Info</h2>\n<ul>\n");
    s.push_str(&format!("<li>ROM: {}\n", escape_html(title)));
    s.push_str(&format!("<li>Language: {lang}\n"));
    s.push_str(&format!("<li>Generated On: {}\n", escape_html(generated_on)));
    s.push_str("</ul>\n\n");

    s.push_str("<h2>Tables</h2>\n<ul>\n");
    if db.creatures.is_some() {
        s.push_str("<li><a href=\"#creatures\">Creatures</a>\n");
    }
    if db.items.is_some() {
        s.push_str("<li><a href=\"#items\">Items</a>\n");
    }
    if db.effects.is_some() {
        s.push_str("<li><a href=\"#effects\">Effects</a>\n");
    }
    if db.string_pages.is_some() {
        s.push_str("<li><a href=\"#strings\">Strings</a>\n");
    }
    s.push_str("</ul>\n");

    if let Some(creatures) = &db.creatures {
        write_creatures(&mut s, rom, db, creatures)?;
    }
    if let Some(items) = &db.items {
        write_items(&mut s, db, items);
    }
    if let Some(effects) = &db.effects {
        write_effects(&mut s, effects);
    }
    if let Some(pages) = &db.string_pages {
        write_string_pages(&mut s, pages);
    }
    log::debug!("html report: {} bytes", s.len());
    Ok(s)
}

fn write_creatures(
    s: &mut String,
    rom: &mut RomImage,
    db: &Database,
    creatures: &[Creature],
) -> Result<(), ReportError> {
    s.push_str("<h3 id=creatures>Creatures</h3>\n");
    s.push_str(
        "<table border=1>\n\
         <tr><th>No. <th>Name <th>Lvl <th>HP <th>MP <th>Tribe <th>End <th>Int <th>Str \
         <th>Spd <th>Luck <th>Exp <th>Spells <th>\n",
    );
    for (i, c) in creatures.iter().enumerate() {
        s.push_str(&format!("<tr id=creature-{i}>"));
        s.push_str(&format!("<td>{} <td>{} ", c.num, render_text(&c.name)));
        s.push_str(&format!(
            "<td>{} <td>{} <td>{} <td>{} ",
            c.level, c.hp, c.mp, c.tribe
        ));
        s.push_str(&format!(
            "<td>{} <td>{} <td>{} <td>{} <td>{} <td>{} ",
            c.endurance, c.intelligence, c.strength, c.speed, c.luck, c.experience
        ));

        s.push_str("<td>");
        if db.effects.is_some() {
            write_spells(s, db, c);
        }

        s.push_str("<td>");
        match db.sprite_for(c) {
            Some(sprite) if sprite.tiles_width == 0 || sprite.tiles_height == 0 => {
                log::debug!(
                    "creature {}: empty {}x{} sprite, no image",
                    c.num,
                    sprite.tiles_width,
                    sprite.tiles_height
                );
            }
            Some(sprite) => {
                let img = render_sprite(rom, sprite)?;
                s.push_str(&format!("<img src=\"{}\">", data_uri(&img)?));
            }
            None => {}
        }
        s.push('\n');
    }
    s.push_str("</table>\n\n");
    Ok(())
}

fn write_spells(s: &mut String, db: &Database, creature: &Creature) {
    for (pos, &id) in creature.spells.iter().enumerate() {
        s.push_str(&effect_link(db, id));
        match creature.spell_context(pos) {
            SpellContext::EnemyOnly => s.push_str(" (Enemy only)"),
            SpellContext::AllyOnly => s.push_str(" (Ally only)"),
            SpellContext::Both => {}
        }
        s.push_str("<br>");
    }
}

fn write_items(s: &mut String, db: &Database, items: &[Item]) {
    s.push_str("<h3 id=items>Items</h3>\n");
    s.push_str(
        "<table border=1>\n\
         <tr><th>No. <th>Name <th>Buy Price <th>Sell Price <th>Off <th>Def <th>Party <th>Use <th>Effect\n",
    );
    for (i, item) in items.iter().enumerate() {
        s.push_str(&format!("<tr id=item-{i}>"));
        s.push_str(&format!("<td>{} <td>{} ", item.num, render_text(&item.name)));
        if item.for_sale() {
            s.push_str(&format!("<td>{} <td>{} ", item.buy_price, item.sell_price));
        } else {
            s.push_str("<td>— <td>— ");
        }
        s.push_str(&format!("<td>{} <td>{} ", item.offense, item.defense));
        s.push_str(&format!(
            "<td>{} <td>{} ",
            item_party(item.flags),
            item_use(item.flags)
        ));
        s.push_str("<td>");
        if let Some(id) = item.effect {
            s.push_str(&effect_link(db, id));
        }
        s.push('\n');
    }
    s.push_str("</table>\n\n");
}

/// Anchor to an effect row, or the bare id when the table has no such effect.
fn effect_link(db: &Database, id: u8) -> String {
    match db.effect(id) {
        Some(effect) => format!("<a href=\"#effect-{id}\">{}</a>", render_text(&effect.name)),
        None => format!("#{id}"),
    }
}

/// Party members able to use an item, numbered from 1.
fn item_party(flags: ItemFlags) -> String {
    (0..3)
        .filter(|&member| flags.usable_by(member))
        .map(|member| (member + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn item_use(flags: ItemFlags) -> String {
    let mut uses = Vec::new();
    if flags.contains(ItemFlags::FIELD) {
        uses.push("Field");
    }
    if flags.contains(ItemFlags::BATTLE) {
        uses.push("Battle");
    }
    uses.join(", ")
}

fn write_effects(s: &mut String, effects: &[Effect]) {
    s.push_str("<h3 id=effects>Effects</h3>\n");
    s.push_str(
        "<table border=1>\n\
         <tr><th>No. <th>Name <th>Cost <th>Use <th>Target\n",
    );
    for (i, effect) in effects.iter().enumerate() {
        s.push_str(&format!("<tr id=effect-{i}>"));
        s.push_str(&format!(
            "<td>{} <td>{} <td>{} ",
            effect.num,
            render_text(&effect.name),
            effect.cost
        ));
        s.push_str(&format!(
            "<td>{} <td>{} ",
            effect_use(effect.flags),
            effect_target(effect.flags)
        ));
        s.push('\n');
    }
    s.push_str("</table>\n\n");
}

fn effect_use(flags: EffectFlags) -> String {
    let mut uses = Vec::new();
    if flags.contains(EffectFlags::FIELD) {
        uses.push("Field");
    }
    if flags.contains(EffectFlags::BATTLE) {
        uses.push("Battle");
    }
    uses.join(", ")
}

fn effect_target(flags: EffectFlags) -> String {
    let mut targets = Vec::new();
    if flags.contains(EffectFlags::FULL_STACK) {
        targets.push("Full stack");
    }
    if flags.contains(EffectFlags::ALL_TARGETS) {
        targets.push("All targets");
    }
    if flags.contains(EffectFlags::ENEMIES_ONLY) {
        targets.push("Enemies only");
    }
    targets.join(", ")
}

fn write_string_pages(s: &mut String, pages: &[StringPage]) {
    s.push_str("<h3 id=strings>Strings</h3>\n");
    for page in pages {
        s.push_str(&format!("<h4>{}</h4>\n", escape_html(&page.name)));
        s.push_str("<table border=1>\n<tr><th>No. <th>Text\n");
        for (i, text) in page.strings.iter().enumerate() {
            s.push_str(&format!("<tr><td>{} <td>{} \n", i, render_text(text)));
        }
        s.push_str("</table>\n\n");
    }
}

/// Render a decoded text field.
///
/// A lone plain run is trimmed and printed as-is. Otherwise line breaks
/// become `<br>` and the remaining control codes are shown as small
/// bracketed annotations.
pub fn render_text(text: &Text) -> String {
    if let Some(plain) = text.as_plain() {
        return escape_html(plain.trim());
    }
    let mut out = String::new();
    for token in text.tokens() {
        match token {
            TextToken::PlainText(s) => out.push_str(&escape_html(s)),
            TextToken::Newline | TextToken::ScrollUp => out.push_str("<br>"),
            TextToken::EndOfText => out.push_str("<small>[END]</small>"),
            TextToken::WaitForButton => out.push_str("<small>[WAIT]</small>"),
            TextToken::YesNoPrompt => out.push_str("<small>[YES/NO]</small>"),
            TextToken::HeroNameRef(Some(index)) => {
                out.push_str(&format!("<small>[HERO {index}]</small>"));
            }
            TextToken::HeroNameRef(None) => out.push_str("<small>[HERO]</small>"),
            TextToken::UnknownControlCode(b) => {
                out.push_str(&format!("<small>[{b:02X}]</small>"));
            }
        }
    }
    out
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
