use crate::foundation::core::Color;
use crate::settings::model::{BadgePosition, ThumbnailSettings, TitlePosition};
use crate::settings::preset::{apply_preset, PresetId};

/// A single explicit settings mutation.
///
/// Every control in a front end maps to exactly one command; reducing a
/// command against a [`ThumbnailSettings`] is the only supported way to
/// mutate it. Commands serialize (tagged) so an edit stream can be logged or
/// replayed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", content = "value", rename_all = "camelCase")]
pub enum EditCommand {
    SetTitle(String),
    SetTitleFont(String),
    SetTitleSize(u32),
    SetTitleColor(Color),
    SetStrokeColor(Color),
    SetStrokeWidth(u32),
    SetTitlePosition(TitlePosition),
    SetTitleShadow(bool),
    SetAuthorPosition(BadgePosition),
    SetAuthorSize(u32),
    SetAuthorBorder(bool),
    SetOverlayEnabled(bool),
    SetOverlayColor(Color),
    SetOverlayOpacity(u8),
    ApplyPreset(PresetId),
}

/// Reduce one command onto the settings record.
pub fn apply(settings: &mut ThumbnailSettings, cmd: EditCommand) {
    match cmd {
        EditCommand::SetTitle(v) => settings.title = v,
        EditCommand::SetTitleFont(v) => settings.title_font = v,
        EditCommand::SetTitleSize(v) => settings.title_size = v,
        EditCommand::SetTitleColor(v) => settings.title_color = v,
        EditCommand::SetStrokeColor(v) => settings.stroke_color = v,
        EditCommand::SetStrokeWidth(v) => settings.stroke_width = v,
        EditCommand::SetTitlePosition(v) => settings.title_position = v,
        EditCommand::SetTitleShadow(v) => settings.title_shadow = v,
        EditCommand::SetAuthorPosition(v) => settings.author_position = v,
        EditCommand::SetAuthorSize(v) => settings.author_size = v,
        EditCommand::SetAuthorBorder(v) => settings.author_border = v,
        EditCommand::SetOverlayEnabled(v) => settings.overlay_enabled = v,
        EditCommand::SetOverlayColor(v) => settings.overlay_color = v,
        EditCommand::SetOverlayOpacity(v) => settings.overlay_opacity = v,
        EditCommand::ApplyPreset(id) => apply_preset(settings, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_mutate_one_field_each() {
        let mut s = ThumbnailSettings::default();
        let before = s.clone();

        apply(&mut s, EditCommand::SetOverlayOpacity(55));
        assert_eq!(s.overlay_opacity, 55);
        assert_eq!(
            ThumbnailSettings {
                overlay_opacity: before.overlay_opacity,
                ..s.clone()
            },
            before
        );

        apply(&mut s, EditCommand::SetTitle("A\nB".to_string()));
        assert_eq!(s.title, "A\nB");
    }

    #[test]
    fn apply_preset_command_matches_direct_application() {
        let mut via_cmd = ThumbnailSettings::default();
        apply(&mut via_cmd, EditCommand::ApplyPreset(PresetId::Dramatic));

        let mut direct = ThumbnailSettings::default();
        apply_preset(&mut direct, PresetId::Dramatic);

        assert_eq!(via_cmd, direct);
    }

    #[test]
    fn commands_serialize_tagged() {
        let cmd = EditCommand::SetOverlayOpacity(20);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["cmd"], "setOverlayOpacity");
        assert_eq!(json["value"], 20);

        let back: EditCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn edit_stream_replay_is_deterministic() {
        let stream = vec![
            EditCommand::ApplyPreset(PresetId::Vlog),
            EditCommand::SetTitleSize(64),
            EditCommand::SetAuthorBorder(false),
        ];

        let mut a = ThumbnailSettings::default();
        let mut b = ThumbnailSettings::default();
        for cmd in &stream {
            apply(&mut a, cmd.clone());
        }
        for cmd in stream {
            apply(&mut b, cmd);
        }
        assert_eq!(a, b);
        assert_eq!(a.title_size, 64);
        assert_eq!(a.title, "DAY IN MY LIFE");
    }
}
