/*!
# Key Names

Key names are upper case but scripts may use any case.

| Names | Keys |
|-------|------|
| `A` to `Z`, `0` to `9` | letters and digits |
| `F1` to `F12` | function keys |
| `SPACE` `ENTER` `RETURN` `TAB` `ESCAPE` `ESC` `BACKSPACE` | |
| `INSERT` `INS` `DELETE` `DEL` `HOME` `END` | |
| `PAGEUP` `PGUP` `PAGEDOWN` `PGDN` | |
| `UP` `DOWN` `LEFT` `RIGHT` | arrows |
| `SHIFT` `LSHIFT` `RSHIFT` `CTRL` `CONTROL` `LCTRL` `RCTRL` | |
| `ALT` `LALT` `RALT` `WIN` `WINDOWS` `LWIN` `RWIN` | |
| `NUMPAD0` to `NUMPAD9` `MULTIPLY` `ADD` `SUBTRACT` `DECIMAL` `DIVIDE` | keypad |
| `COMMA` `PERIOD` `DOT` `SEMICOLON` `QUOTE` `APOSTROPHE` | |
| `SLASH` `BACKSLASH` `LEFTBRACKET` `RIGHTBRACKET` | |
| `MINUS` `EQUALS` `EQUAL` `GRAVE` `TILDE` | |

## More names

Other keys can be named in a TOML file passed with `--keys`.
Codes are Windows virtual-key codes.

```toml
[keys]
JUMP = 0x20
VOLUMEUP = 0xAF
```

A name in the file replaces a standard name.

*/
