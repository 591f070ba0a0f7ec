/*!
# Introductory Tutorial for Keymacro

A macro script is a plain text file with one statement per line.
Write the following into a file named `macro.ini` in the current directory.

```text
# open the chat box and say hello three times
LOOP 3
  KEY ENTER
  PAUSE 0.5
  KEY H
  KEY I
  KEY ENTER
  PAUSE 1-2
ENDLOOP
```

Then run `keymacro`. You get three seconds to switch to the window that
should receive the keys. Press CTRL-C at any time to stop the macro.
Stopping early is not an error.

Statements are not case sensitive and neither are key names. Indentation
is ignored. A line starting with `#` or `;` is a comment.

## Checking a script

A line that can't be understood doesn't stop the macro. It is reported
and skipped, and the remaining lines still run. To see the report without
running anything use `--check`.

<pre><code>&nbsp;$ keymacro --check macro.ini
&nbsp;INVALID PAUSE DURATION IN 4 (6..9); PAUSE abc
&nbsp;    PAUSE abc
</code></pre>

The numbers in parentheses are the columns of the offending text, which
is underlined in a terminal. `--list` shows what the script compiled to.

<pre><code>&nbsp;$ keymacro --list macro.ini
&nbsp;   0     2  LOOP(3 END 7)
&nbsp;   1     3  KEY(ENTER 50)
&nbsp;   2     4  PAUSE(500)
&nbsp;   3     5  KEY(H 50)
&nbsp;   4     6  KEY(I 50)
&nbsp;   5     7  KEY(ENTER 50)
&nbsp;   6     8  PAUSE(1000..=2000)
&nbsp;   7     9  ENDLOOP(START 0)
</code></pre>

## Dry runs

Keys are only sent when built with the `enigo` feature. Otherwise, or with
`--dry-run`, every pause and key press is logged and waited out instead.
Random durations can be made repeatable with `--seed`.

*/
