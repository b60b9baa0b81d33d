//! Buffs → [`Buff`].

use sdv_data_model::Buff;
use sdv_data_model::raw::RawBuff;

use crate::strings::StringTables;

pub fn normalize_buff(id: &str, raw: &RawBuff, strings: &StringTables) -> Buff {
    let mut buff = Buff::new(
        id,
        strings.resolve(&raw.display_name),
        raw.duration,
        raw.icon_sprite_index,
    );
    if let Some(is_debuff) = raw.is_debuff {
        buff.is_debuff = is_debuff;
    }
    if let Some(effects) = &raw.effects {
        buff.effects = effects.clone();
    }
    buff.description = raw.description.as_deref().and_then(|d| strings.resolve(d));
    buff
}
