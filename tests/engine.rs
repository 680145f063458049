mod tests {
    use aqua_light_composer::{
        CommandChannel, Instant, LightCommand, ModeId, OutputDriver, Rgb, SceneEngine,
        SceneEngineConfig,
        frame_scheduler::{DEFAULT_FRAME_DURATION, FrameScheduler},
    };

    const N: usize = 60;
    const CHANNEL: usize = 8;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn full_brightness_config(mode: ModeId) -> SceneEngineConfig {
        SceneEngineConfig {
            mode,
            brightness: 255,
            ..SceneEngineConfig::default()
        }
    }

    #[test]
    fn test_starts_off_and_black() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &SceneEngineConfig::default());

        assert_eq!(engine.mode(), ModeId::Off);
        let frame = engine.render(Instant::from_millis(0));
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_off_clears_regardless_of_prior_mode() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Apocalypse));

        let frame = engine.render(Instant::from_millis(0));
        assert!(frame.iter().any(|&led| led != BLACK));

        engine.set_mode(ModeId::Off);
        let frame = engine.render(Instant::from_millis(1));
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_custom_color_switches_to_basic_and_fills() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Rain));

        let teal = Rgb {
            r: 0,
            g: 128,
            b: 96,
        };
        engine.set_custom_color(teal);
        assert_eq!(engine.mode(), ModeId::Basic);

        let frame = engine.render(Instant::from_millis(0));
        assert!(frame.iter().all(|&led| led == teal));
    }

    #[test]
    fn test_brightness_scales_output_only() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Basic));

        engine.set_custom_color(WHITE);
        engine.set_brightness(128);
        let frame = engine.render(Instant::from_millis(0));
        assert!(frame.iter().all(|&led| led.r == 128 && led.g == 128 && led.b == 128));

        // Restoring full brightness restores the scene's own colors:
        // the effect buffer was never scaled.
        engine.set_brightness(255);
        let frame = engine.render(Instant::from_millis(1));
        assert!(frame.iter().all(|&led| led == WHITE));

        engine.set_brightness(0);
        let frame = engine.render(Instant::from_millis(2));
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_commands_drain_from_channel() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let sender = channel.sender();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Off));

        sender
            .try_send(LightCommand::with_mode(ModeId::Basic))
            .unwrap();
        sender
            .try_send(LightCommand {
                brightness: Some(42),
                color: Some(WHITE),
                ..LightCommand::default()
            })
            .unwrap();

        engine.render(Instant::from_millis(0));
        assert_eq!(engine.mode(), ModeId::Basic);
        assert_eq!(engine.brightness(), 42);
        assert_eq!(engine.color(), WHITE);
    }

    #[test]
    fn test_power_shortcut() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Off));

        // On: Off -> Basic
        engine.apply_command(&LightCommand {
            power: Some(true),
            ..LightCommand::default()
        });
        assert_eq!(engine.mode(), ModeId::Basic);

        // On while already in a scene: no change
        engine.set_mode(ModeId::Rain);
        engine.apply_command(&LightCommand {
            power: Some(true),
            ..LightCommand::default()
        });
        assert_eq!(engine.mode(), ModeId::Rain);

        // Off always lands in Off
        engine.apply_command(&LightCommand {
            power: Some(false),
            ..LightCommand::default()
        });
        assert_eq!(engine.mode(), ModeId::Off);
    }

    #[test]
    fn test_scene_frame_interval_is_non_blocking() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &full_brightness_config(ModeId::Apocalypse));

        // Apocalypse re-renders at most every 30 ms; a call in between
        // returns the same frame instead of blocking or re-flickering.
        let first: Vec<Rgb> = engine.render(Instant::from_millis(0)).to_vec();
        let held: Vec<Rgb> = engine.render(Instant::from_millis(10)).to_vec();
        assert_eq!(first, held);

        let advanced: Vec<Rgb> = engine.render(Instant::from_millis(40)).to_vec();
        assert_ne!(first, advanced);
    }

    #[test]
    fn test_night_sky_is_dark_blue_ambient() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> = SceneEngine::new(
            channel.receiver(),
            &full_brightness_config(ModeId::SkySimulation),
        );

        engine.set_hour_of_day(2.0);
        let frame = engine.render(Instant::from_millis(0));
        assert!(frame.iter().all(|&led| led == Rgb { r: 0, g: 0, b: 10 }));
    }

    #[test]
    fn test_midday_sky_has_highlight() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> = SceneEngine::new(
            channel.receiver(),
            &full_brightness_config(ModeId::SkySimulation),
        );

        engine.set_hour_of_day(12.0);
        let frame = engine.render(Instant::from_millis(0));
        // Midday ambient is bright everywhere
        assert!(frame.iter().all(|&led| led.r > 0));
        // The sun highlight sits at index len/2 at hour 12
        let sun = frame[N / 2];
        assert!(sun.r >= frame[0].r);
    }

    #[test]
    fn test_status_snapshot() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let mut engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &SceneEngineConfig::default());

        engine.set_mode(ModeId::Meteor);
        engine.set_brightness(77);
        let status = engine.status();
        assert_eq!(status.mode, ModeId::Meteor);
        assert_eq!(status.mode.as_str(), "meteor");
        assert_eq!(status.brightness, 77);
    }

    struct CapturingDriver {
        frames: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for CapturingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last = colors.to_vec();
        }
    }

    #[test]
    fn test_scheduler_pushes_every_frame() {
        let channel: CommandChannel<CHANNEL> = CommandChannel::new();
        let engine: SceneEngine<'_, N, CHANNEL> =
            SceneEngine::new(channel.receiver(), &SceneEngineConfig::default());
        let driver = CapturingDriver {
            frames: 0,
            last: Vec::new(),
        };
        let mut scheduler = FrameScheduler::new(engine, driver);

        // The host drives the engine through the scheduler once it owns it.
        scheduler.engine_mut().set_mode(ModeId::SkySimulation);
        scheduler.engine_mut().set_hour_of_day(2.0);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(0) + DEFAULT_FRAME_DURATION);
        assert!(result.sleep_duration <= DEFAULT_FRAME_DURATION);
        assert_eq!(scheduler.engine().mode(), ModeId::SkySimulation);

        // Unchanged frames are still pushed to the sink.
        scheduler.tick(result.next_deadline);
        scheduler.tick(result.next_deadline + DEFAULT_FRAME_DURATION);
    }
}
