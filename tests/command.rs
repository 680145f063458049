mod tests {
    use aqua_light_composer::{
        CommandChannel, LightCommand, ModeId, Rgb,
        color::parse_hex_color,
        command::TryReceiveError,
    };

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF00AA"),
            Rgb {
                r: 255,
                g: 0,
                b: 170
            }
        );
        assert_eq!(
            parse_hex_color("00ff7f"),
            Rgb {
                r: 0,
                g: 255,
                b: 127
            }
        );
    }

    #[test]
    fn test_malformed_color_defaults_to_black() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        assert_eq!(parse_hex_color("not-a-color"), black);
        assert_eq!(parse_hex_color(""), black);
        assert_eq!(parse_hex_color("#"), black);
        assert_eq!(parse_hex_color("#FF00AA00FF"), black);
    }

    #[test]
    fn test_mode_wire_tags_round_trip() {
        for mode in [
            ModeId::Off,
            ModeId::SkySimulation,
            ModeId::Rain,
            ModeId::Meteor,
            ModeId::Apocalypse,
            ModeId::Basic,
        ] {
            assert_eq!(ModeId::parse_from_str(mode.as_str()), Some(mode));
            assert_eq!(ModeId::from_raw(mode as u8), Some(mode));
        }
        assert_eq!(ModeId::parse_from_str("disco"), None);
        assert_eq!(ModeId::from_raw(6), None);
    }

    #[test]
    fn test_channel_bounded_send_receive() {
        let channel: CommandChannel<2> = CommandChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert_eq!(receiver.try_receive(), Err(TryReceiveError));

        sender
            .try_send(LightCommand::with_mode(ModeId::Rain))
            .unwrap();
        sender
            .try_send(LightCommand::with_mode(ModeId::Meteor))
            .unwrap();

        // Full queue: the rejected command comes back in the error.
        let overflow = LightCommand::with_mode(ModeId::Basic);
        let err = sender.try_send(overflow).unwrap_err();
        assert_eq!(err.0, overflow);

        assert_eq!(
            receiver.try_receive().unwrap().mode,
            Some(ModeId::Rain)
        );
        assert_eq!(
            receiver.try_receive().unwrap().mode,
            Some(ModeId::Meteor)
        );
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }
}
